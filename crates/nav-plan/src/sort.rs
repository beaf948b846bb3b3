//! Route ordering by explicit criterion and algorithm.
//!
//! `Route` has no natural order.  Every sort names a [`SortCriterion`]
//! (what to compare) and a [`SortAlgorithm`] (how to sort), chosen
//! independently.  Dispatch goes through function tables so the
//! criterion × algorithm grid can be tested cell by cell.
//!
//! # Stability
//!
//! All three algorithms produce the same key order.  Only
//! [`SortAlgorithm::Merge`] keeps equal-key routes in input order; quick and
//! heap sort may reorder ties.
//!
//! The algorithms are public and generic so they can be checked on plain
//! data as well.

use std::cmp::Ordering;

use nav_spatial::Route;

// ── Criterion ─────────────────────────────────────────────────────────────────

/// Numeric sort key extracted from a route.  Smaller sorts first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SortCriterion {
    /// Total distance in metres.
    Distance,
    /// Total effective minutes.
    Time,
    /// Number of landmark waypoints (landmark, bank, library).
    LandmarkCount,
    /// `0.6 × distance + 0.4 × (minutes × 10)`.  The ×10 puts minutes on a
    /// scale comparable to metres.
    Weighted,
}

const DISTANCE_WEIGHT: f64 = 0.6;
const TIME_WEIGHT:     f64 = 0.4;
const TIME_SCALE:      f64 = 10.0;

type KeyFn = fn(&Route) -> f64;

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Distance,
        SortCriterion::Time,
        SortCriterion::LandmarkCount,
        SortCriterion::Weighted,
    ];

    /// The key this criterion sorts by.
    pub fn key(self, route: &Route) -> f64 {
        (self.key_fn())(route)
    }

    fn key_fn(self) -> KeyFn {
        match self {
            SortCriterion::Distance      => Route::total_distance_m,
            SortCriterion::Time          => Route::total_minutes,
            SortCriterion::LandmarkCount => |r: &Route| r.landmark_count() as f64,
            SortCriterion::Weighted      => |r: &Route| {
                DISTANCE_WEIGHT * r.total_distance_m() + TIME_WEIGHT * (r.total_minutes() * TIME_SCALE)
            },
        }
    }
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum SortAlgorithm {
    /// Lomuto partition, last element as pivot.  O(n²) worst case on
    /// already-sorted input.  Not stable.
    Quick,
    /// Top-down merge sort.  O(n log n), stable.
    #[default]
    Merge,
    /// In-place binary max-heap.  O(n log n), not stable.
    Heap,
}

/// A sort key paired with the route's input position.
type Keyed = (f64, usize);
type SortFn = fn(&mut [Keyed], &dyn Fn(&Keyed, &Keyed) -> Ordering);

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [SortAlgorithm::Quick, SortAlgorithm::Merge, SortAlgorithm::Heap];

    /// `true` if equal keys keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, SortAlgorithm::Merge)
    }

    fn sort_fn(self) -> SortFn {
        match self {
            SortAlgorithm::Quick => quick_sort::<Keyed>,
            SortAlgorithm::Merge => merge_sort::<Keyed>,
            SortAlgorithm::Heap  => heap_sort::<Keyed>,
        }
    }
}

// ── RouteSorter ───────────────────────────────────────────────────────────────

/// A criterion and an algorithm, applied together.
#[derive(Copy, Clone, Debug)]
pub struct RouteSorter {
    pub criterion: SortCriterion,
    pub algorithm: SortAlgorithm,
}

impl RouteSorter {
    pub fn new(criterion: SortCriterion, algorithm: SortAlgorithm) -> Self {
        Self { criterion, algorithm }
    }

    /// Sorted references into `routes`.  `routes` itself is untouched.
    pub fn sort_refs<'r>(&self, routes: &'r [Route]) -> Vec<&'r Route> {
        let key = self.criterion.key_fn();
        let mut keyed: Vec<Keyed> = routes.iter().enumerate().map(|(i, r)| (key(r), i)).collect();
        (self.algorithm.sort_fn())(&mut keyed, &|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, i)| &routes[i]).collect()
    }

    /// Sorted copy of `routes`.
    pub fn sort(&self, routes: &[Route]) -> Vec<Route> {
        self.sort_refs(routes).into_iter().cloned().collect()
    }
}

/// Sorted copy of `routes` by `criterion` using `algorithm`.
pub fn sort_routes(routes: &[Route], criterion: SortCriterion, algorithm: SortAlgorithm) -> Vec<Route> {
    RouteSorter::new(criterion, algorithm).sort(routes)
}

// ── Quick sort ────────────────────────────────────────────────────────────────

/// Lomuto quicksort.  Recurses into the smaller side and loops on the
/// larger, so stack depth stays O(log n) even when time goes quadratic.
pub fn quick_sort<T>(mut v: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    while v.len() > 1 {
        let p = lomuto_partition(v, cmp);
        let (left, right) = std::mem::take(&mut v).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, cmp);
            v = right;
        } else {
            quick_sort(right, cmp);
            v = left;
        }
    }
}

/// Partition around the last element.  Elements `<=` the pivot move left.
/// Returns the pivot's final index.
fn lomuto_partition<T>(v: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) -> usize {
    let pivot = v.len() - 1;
    let mut store = 0;
    for j in 0..pivot {
        if cmp(&v[j], &v[pivot]) != Ordering::Greater {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, pivot);
    store
}

// ── Merge sort ────────────────────────────────────────────────────────────────

/// Stable top-down merge sort with one scratch buffer.
pub fn merge_sort<T: Clone>(v: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    if v.len() <= 1 {
        return;
    }
    let mut scratch = v.to_vec();
    merge_sort_into(v, &mut scratch, cmp);
}

fn merge_sort_into<T: Clone>(v: &mut [T], scratch: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    let n = v.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        let (s_left, s_right) = scratch.split_at_mut(mid);
        merge_sort_into(left, s_left, cmp);
        merge_sort_into(right, s_right, cmp);
    }

    scratch[..n].clone_from_slice(v);
    let (mut i, mut j) = (0, mid);
    for slot in v.iter_mut() {
        // Ties take from the left run.
        let take_left = j >= n || (i < mid && cmp(&scratch[i], &scratch[j]) != Ordering::Greater);
        if take_left {
            *slot = scratch[i].clone();
            i += 1;
        } else {
            *slot = scratch[j].clone();
            j += 1;
        }
    }
}

// ── Heap sort ─────────────────────────────────────────────────────────────────

/// In-place heapsort on a binary max-heap.
pub fn heap_sort<T>(v: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    let n = v.len();
    for i in (0..n / 2).rev() {
        sift_down(v, n, i, cmp);
    }
    for end in (1..n).rev() {
        v.swap(0, end);
        sift_down(v, end, 0, cmp);
    }
}

fn sift_down<T>(v: &mut [T], len: usize, mut root: usize, cmp: &dyn Fn(&T, &T) -> Ordering) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && cmp(&v[left], &v[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < len && cmp(&v[right], &v[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        v.swap(root, largest);
        root = largest;
    }
}
