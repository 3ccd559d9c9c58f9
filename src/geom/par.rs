//! Per-index work that runs on the rayon pool when the `parallel` feature is
//! enabled and sequentially otherwise. Output order always follows the index.

cfg_if::cfg_if! {
    if #[cfg(feature = "parallel")] {
        use rayon::prelude::*;

        pub(crate) fn build_indexed<T, E, F>(count: usize, f: F) -> Result<Vec<T>, E>
        where
            T: Send,
            E: Send,
            F: Fn(usize) -> Result<T, E> + Sync + Send,
        {
            (0..count).into_par_iter().map(f).collect()
        }
    } else {
        pub(crate) fn build_indexed<T, E, F>(count: usize, f: F) -> Result<Vec<T>, E>
        where
            F: Fn(usize) -> Result<T, E>,
        {
            (0..count).map(f).collect()
        }
    }
}
