//! Teammate search state, its messages and the system applying searches.
use bevy::prelude::*;

use super::{
    catalog::{find_teammate, TeammateProfile, TEAMMATES},
    filter::{TeammateQuery, ALL_CATEGORIES_LABEL, ANY_AVAILABILITY_LABEL},
};

/// Search inputs as typed into the teammate finder.
#[derive(Message, Debug, Clone)]
pub struct TeammateSearchRequest {
    pub query: String,
    pub category: String,
    pub availability: String,
}

impl TeammateSearchRequest {
    pub fn new(
        query: impl Into<String>,
        category: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
            availability: availability.into(),
        }
    }
}

/// Fired after a search has been applied.
#[derive(Message, Debug, Clone, Copy)]
pub struct TeammateSearchPerformed {
    pub result_count: usize,
}

/// Current search and its matches, as catalog ids in catalog order.
#[derive(Resource, Debug, Clone)]
pub struct TeammateSearch {
    query: TeammateQuery,
    results: Vec<u32>,
    searches: u32,
}

impl Default for TeammateSearch {
    fn default() -> Self {
        let query = TeammateQuery::new("", ALL_CATEGORIES_LABEL, ANY_AVAILABILITY_LABEL);
        let results = query.apply(&TEAMMATES).iter().map(|profile| profile.id).collect();
        Self {
            query,
            results,
            searches: 0,
        }
    }
}

impl TeammateSearch {
    pub fn apply(&mut self, request: &TeammateSearchRequest) -> usize {
        self.query = TeammateQuery::new(&request.query, &request.category, &request.availability);
        self.results = self
            .query
            .apply(&TEAMMATES)
            .iter()
            .map(|profile| profile.id)
            .collect();
        self.searches += 1;
        self.results.len()
    }

    pub fn query(&self) -> &TeammateQuery {
        &self.query
    }

    pub fn results(&self) -> impl Iterator<Item = &'static TeammateProfile> + '_ {
        self.results.iter().filter_map(|id| find_teammate(*id))
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn searches(&self) -> u32 {
        self.searches
    }
}

pub fn apply_teammate_searches(
    mut requests: MessageReader<TeammateSearchRequest>,
    mut search: ResMut<TeammateSearch>,
    mut performed: MessageWriter<TeammateSearchPerformed>,
) {
    for request in requests.read() {
        let result_count = search.apply(request);
        debug!(
            target: "teammates",
            "Teammate search \"{}\" / {} / {} -> {} matches",
            request.query,
            request.category,
            request.availability,
            result_count
        );
        performed.write(TeammateSearchPerformed { result_count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Performed(Vec<usize>);

    fn capture(mut seen: ResMut<Performed>, mut reader: MessageReader<TeammateSearchPerformed>) {
        seen.0.extend(reader.read().map(|event| event.result_count));
    }

    #[test]
    fn search_starts_with_full_catalog() {
        let search = TeammateSearch::default();
        assert_eq!(search.result_count(), TEAMMATES.len());
        assert_eq!(search.searches(), 0);
    }

    #[test]
    fn requests_update_results() {
        let mut app = App::new();
        app.add_message::<TeammateSearchRequest>()
            .add_message::<TeammateSearchPerformed>()
            .init_resource::<TeammateSearch>()
            .init_resource::<Performed>()
            .add_systems(Update, (apply_teammate_searches, capture).chain());

        app.world_mut().write_message(TeammateSearchRequest::new(
            "react",
            ALL_CATEGORIES_LABEL,
            "Evenings",
        ));
        app.update();

        let search = app.world().resource::<TeammateSearch>();
        let names: Vec<_> = search.results().map(|profile| profile.name).collect();
        assert_eq!(names, vec!["Daniel Kim"]);
        assert_eq!(search.query().text(), "react");
        assert_eq!(app.world().resource::<Performed>().0, vec![1]);
    }
}
