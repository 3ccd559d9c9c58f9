mod test_curve_basic;
mod test_revolve_basic;
mod test_sweep_basic;
