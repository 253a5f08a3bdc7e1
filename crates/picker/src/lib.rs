//! Fills the search box with a random example query.

pub mod pools;
pub mod random;

pub use pools::{ExamplePool, PLAIN_EXAMPLES, REGEX_EXAMPLES};
pub use random::{Fixed, SeededRandom};

use tode_core::{RandomSource, SearchType, TextInput, Toggle, ValueField};
use tracing::{debug, trace};

/// Writes a random example into the search input, choosing the pool from
/// the regex toggle each time it runs.
pub struct ExamplePicker<I, T, R> {
    input: I,
    regex: T,
    rng: R,
}

impl<I, T, R> ExamplePicker<I, T, R>
where
    I: TextInput,
    T: Toggle,
    R: RandomSource,
{
    pub fn new(input: I, regex: T, rng: R) -> Self {
        Self { input, regex, rng }
    }

    /// Pool the next `pick` would draw from.
    pub fn active_pool(&self) -> ExamplePool {
        ExamplePool::for_regex_mode(self.regex.is_checked())
    }

    pub fn pick(&mut self) -> &'static str {
        let pool = self.active_pool();
        let index = pool.index_for(self.rng.next_f64());
        let value = pool.examples()[index];
        trace!(?pool, index, value, "picked example");

        self.input.set_value(value);
        value
    }
}

/// Resets the search-type field to [`SearchType::Normal`].
///
/// Run once when the page is composed.
pub fn init_search_type<F: ValueField + ?Sized>(field: &F) {
    debug!(value = SearchType::Normal.as_str(), "resetting search type");
    field.set_value(SearchType::Normal.as_str());
}
