//! Owner of the catalog's search query and filter state.
//!
//! The filter panel and catalog view never write the state themselves; they request
//! changes through the controller, which replaces the state wholesale and then publishes
//! the new (query, filters) pair to every subscriber.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog_summary::CatalogSummary;
use crate::course::Course;
use crate::error::CatalogError;
use crate::filter_engine::filter_courses;
use crate::filter_state::{FilterField, FilterPatch, FilterState, FilterUpdate};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub query: String,
    pub filters: FilterState,
}

type Subscriber = Box<dyn FnMut(&CatalogSnapshot)>;

#[derive(Default)]
pub struct CatalogController {
    snapshot: CatalogSnapshot,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("snapshot", &self.snapshot)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl CatalogController {
    pub fn new(query: impl Into<String>, filters: FilterState) -> Self {
        Self { snapshot: CatalogSnapshot { query: query.into(), filters }, subscribers: Vec::new() }
    }

    /// Initial state for a catalog page opened with an optional category and query.
    pub fn from_seed(category: Option<String>, query: impl Into<String>) -> Self {
        Self::new(query, FilterState::with_category(category))
    }

    pub fn query(&self) -> &str {
        &self.snapshot.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.snapshot.filters
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&CatalogSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.snapshot.query = query.into();
        debug!(query = %self.snapshot.query, "catalog query changed");
        self.publish();
    }

    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.replace_filters(self.snapshot.filters.merged(patch));
    }

    pub fn toggle_set_member(&mut self, field: FilterField, value: &str) -> Result<(), CatalogError> {
        let next = self.snapshot.filters.toggle_set_member(field, value).inspect_err(|e| warn!("rejected filter toggle: {e}"))?;
        self.replace_filters(next);
        Ok(())
    }

    pub fn dispatch(&mut self, update: FilterUpdate) -> Result<(), CatalogError> {
        debug!(?update, "catalog filter update");
        let next = self.snapshot.filters.apply(update).inspect_err(|e| warn!("rejected filter update: {e}"))?;
        self.replace_filters(next);
        Ok(())
    }

    /// Resets both the query and the filters.
    pub fn clear(&mut self) {
        self.snapshot = CatalogSnapshot::default();
        debug!("catalog cleared");
        self.publish();
    }

    pub fn filtered<'a>(&self, dataset: &'a [Course]) -> Vec<&'a Course> {
        filter_courses(dataset, &self.snapshot.query, &self.snapshot.filters)
    }

    pub fn summary(&self, dataset: &[Course]) -> CatalogSummary {
        CatalogSummary::new(self.filtered(dataset).len(), dataset.len(), self.snapshot.query.clone())
    }

    fn replace_filters(&mut self, filters: FilterState) {
        self.snapshot.filters = filters;
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = &self.snapshot;
        for subscriber in self.subscribers.iter_mut() {
            subscriber(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::*;
    use crate::filter_state::PriceRange;
    use crate::mock_data::mock_courses;

    fn recording(controller: &mut CatalogController) -> Rc<RefCell<Vec<CatalogSnapshot>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
        seen
    }

    #[test]
    fn every_operation_publishes() {
        let mut controller = CatalogController::default();
        let seen = recording(&mut controller);

        controller.set_query("kwame");
        controller.set_filter(FilterPatch { rating: Some(4.0), ..Default::default() });
        controller.toggle_set_member(FilterField::Categories, "Languages").unwrap();
        controller.dispatch(FilterUpdate::SetPriceRange(PriceRange::new(0.0, 50.0))).unwrap();
        controller.clear();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[0].query, "kwame");
        assert_eq!(seen[1].filters.rating, 4.0);
        assert!(seen[2].filters.categories.contains("Languages"));
        assert_eq!(seen[3].filters.price.max, 50.0);
        assert_eq!(seen[4], CatalogSnapshot::default());
    }

    #[test]
    fn rejected_update_leaves_state_and_publishes_nothing() {
        let mut controller = CatalogController::from_seed(Some("Languages".to_string()), "");
        let seen = recording(&mut controller);
        let before = controller.filters().clone();

        let err = controller.toggle_set_member(FilterField::Rating, "4.5").unwrap_err();
        assert_eq!(err, CatalogError::InvalidFieldKind { field: FilterField::Rating });
        assert_eq!(controller.filters(), &before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn filter_clear_keeps_query_but_clear_resets_both() {
        let mut controller = CatalogController::from_seed(Some("Languages".to_string()), "swahili");
        controller.dispatch(FilterUpdate::Clear).unwrap();
        assert_eq!(controller.query(), "swahili");
        assert_eq!(controller.filters(), &FilterState::default());

        controller.dispatch(FilterUpdate::SetLevel(BTreeSet::from([crate::course::CourseLevel::Advanced]))).unwrap();
        controller.clear();
        assert_eq!(controller.query(), "");
        assert_eq!(controller.filters(), &FilterState::default());
    }

    #[test]
    fn summary_reflects_current_state() {
        let courses = mock_courses();
        let mut controller = CatalogController::default();
        controller.set_query("kwame");
        let summary = controller.summary(&courses);
        assert_eq!(summary, CatalogSummary::new(1, 6, "kwame"));
        assert_eq!(controller.filtered(&courses)[0].instructor, "Kwame Asante");
    }
}
