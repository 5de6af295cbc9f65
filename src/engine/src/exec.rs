//! The single parallel region of the engine.
//!
//! The default scheduler is rayon's work-stealing pool (lower overhead).
//! The `composable-scheduler` feature swaps both helpers for scoped-thread
//! fork-join, which nests safely when replicas already run inside an
//! outer pool. Both variants return results in input order, so the choice
//! never affects simulation output.

#[cfg(not(feature = "composable-scheduler"))]
pub fn par_map<T, U, F>(items: &[T], action: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;

    items.par_iter().map(action).collect()
}

#[cfg(feature = "composable-scheduler")]
pub fn par_map<T, U, F>(items: &[T], action: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = items
            .iter()
            .map(|item| {
                let action = &action;
                scope.spawn(move || action(item))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread panicked"))
            .collect()
    })
}

#[cfg(not(feature = "composable-scheduler"))]
pub fn par_map_mut<T, U, F>(items: &mut [T], action: F) -> Vec<U>
where
    T: Send,
    U: Send,
    F: Fn(&mut T) -> U + Sync,
{
    use rayon::prelude::*;

    items.par_iter_mut().map(|item| action(item)).collect()
}

#[cfg(feature = "composable-scheduler")]
pub fn par_map_mut<T, U, F>(items: &mut [T], action: F) -> Vec<U>
where
    T: Send,
    U: Send,
    F: Fn(&mut T) -> U + Sync,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = items
            .iter_mut()
            .map(|item| {
                let action = &action;
                scope.spawn(move || action(item))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread panicked"))
            .collect()
    })
}
