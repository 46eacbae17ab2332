//! Packing strategies.
//!
//! Every strategy commits one item at a time to a fresh suitcase snapshot and
//! stops once no unpacked item fits:
//! - Rushed: the first item that fits, scanning unpacked items in order
//! - Greedy: the largest item that fits, the earliest one winning ties
//! - Optimal: depth-first branch and bound over every order of every subset,
//!   returning the packing with the greatest area
//!
//! Rushed and greedy are written as loops. Optimal recurses, one level per
//! committed item, so its depth is bounded by the number of items.

use log::debug;

#[cfg(debug_assertions)]
use crate::assertions;
use crate::suitcase::Suitcase;

/// Packs items in order, skipping those that do not fit at their turn.
pub fn rushed_packing(suitcase: Suitcase) -> Suitcase {
    checked(suitcase, |mut suitcase| {
        // packing never reorders the unpacked items, so every rescan picks up
        // exactly where the previous one left off
        loop {
            let Some(position) = suitcase
                .unpacked_items()
                .iter()
                .position(|item| suitcase.has_room_for(item))
            else {
                return suitcase;
            };
            suitcase = suitcase.pack_position(position);
        }
    })
}

/// Repeatedly packs the largest item that still fits.
pub fn greedy_packing(suitcase: Suitcase) -> Suitcase {
    checked(suitcase, |mut suitcase| {
        while let Some(position) = largest_packable(&suitcase) {
            suitcase = suitcase.pack_position(position);
        }
        suitcase
    })
}

/// Finds a packing with the greatest possible packed area.
///
/// Exponential in the number of items. Use [`OptimalSearch::with_max_nodes`]
/// to bound the work.
pub fn optimal_packing(suitcase: Suitcase) -> Suitcase {
    OptimalSearch::default().run(suitcase).suitcase
}

/// Position of the largest unpacked item that fits.
///
/// Ties go to the item encountered first.
fn largest_packable(suitcase: &Suitcase) -> Option<usize> {
    let mut largest: Option<(usize, u64)> = None;

    for (position, item) in suitcase.unpacked_items().iter().enumerate() {
        if !suitcase.has_room_for(item) {
            continue;
        }
        // strictly greater, so an equally large later item never wins
        if largest.map_or(true, |(_, area)| item.area() > area) {
            largest = Some((position, item.area()));
        }
    }

    largest.map(|(position, _)| position)
}

/// Runs `strategy` and checks in debug builds that its result descends from
/// the input.
fn checked(suitcase: Suitcase, strategy: impl FnOnce(Suitcase) -> Suitcase) -> Suitcase {
    #[cfg(debug_assertions)]
    let initial = suitcase.clone();

    let result = strategy(suitcase);

    #[cfg(debug_assertions)]
    debug_assert!(assertions::is_successor_of(&initial, &result));
    result
}

/// Branch-and-bound search for the packing with the greatest area.
///
/// With `max_nodes` set, the search stops opening branches once that many
/// search nodes have been visited and returns the best packing found so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimalSearch {
    pub max_nodes: Option<u64>,
}

/// Result of an [`OptimalSearch`] run.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best packing found.
    pub suitcase: Suitcase,
    /// Number of search nodes visited, the root included.
    pub nodes_explored: u64,
    /// Number of branches skipped by the bound.
    pub branches_pruned: u64,
    /// `false` if the node budget ran out before the search finished.
    pub complete: bool,
}

impl OptimalSearch {
    /// An unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    /// A search that stops branching once `max_nodes` nodes were visited.
    /// The root is always visited.
    pub fn with_max_nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }

    pub fn run(&self, suitcase: Suitcase) -> SearchOutcome {
        let mut state = SearchState {
            max_nodes: self.max_nodes,
            nodes_explored: 0,
            branches_pruned: 0,
            cut_off: false,
        };

        let best = checked(suitcase, |suitcase| state.search(suitcase));

        debug!(
            "optimal search: {} nodes, {} pruned, best area {} of {}{}",
            state.nodes_explored,
            state.branches_pruned,
            best.area_packed(),
            best.capacity(),
            if state.cut_off { " (node budget exhausted)" } else { "" }
        );

        SearchOutcome {
            suitcase: best,
            nodes_explored: state.nodes_explored,
            branches_pruned: state.branches_pruned,
            complete: !state.cut_off,
        }
    }
}

/// Counters threaded through one search.
struct SearchState {
    max_nodes: Option<u64>,
    nodes_explored: u64,
    branches_pruned: u64,
    cut_off: bool,
}

impl SearchState {
    #[inline]
    fn budget_exhausted(&self) -> bool {
        self.max_nodes
            .is_some_and(|max_nodes| self.nodes_explored >= max_nodes)
    }

    /// Returns the best descendant of `suitcase`, or `suitcase` itself if
    /// packing more cannot increase the area.
    fn search(&mut self, suitcase: Suitcase) -> Suitcase {
        self.nodes_explored += 1;

        let mut best_area = suitcase.area_packed();
        let mut best = None;

        for (position, item) in suitcase.unpacked_items().iter().enumerate() {
            if !suitcase.has_room_for(item) {
                continue;
            }
            if self.budget_exhausted() {
                self.cut_off = true;
                break;
            }

            // optimistic bound: the branch packs this item and then everything left
            let area_after = suitcase.area_packed() + item.area();
            let upper_bound = area_after + (suitcase.area_unpacked() - item.area());
            if upper_bound <= best_area {
                self.branches_pruned += 1;
                continue;
            }

            let result = self.search(suitcase.pack_position(position));
            // strictly greater keeps the first best packing found
            if result.area_packed() > best_area {
                best_area = result.area_packed();
                best = Some(result);
            }
        }

        best.unwrap_or(suitcase)
    }
}
