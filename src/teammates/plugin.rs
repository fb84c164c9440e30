//! Teammate finder plugin.
use bevy::prelude::*;

use super::search::{
    apply_teammate_searches, TeammateSearch, TeammateSearchPerformed, TeammateSearchRequest,
};

pub struct TeammatesPlugin;

impl Plugin for TeammatesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TeammateSearch>()
            .add_message::<TeammateSearchRequest>()
            .add_message::<TeammateSearchPerformed>()
            .add_systems(Startup, log_catalog_size)
            .add_systems(Update, apply_teammate_searches);
    }
}

fn log_catalog_size(search: Res<TeammateSearch>) {
    info!("TeammatesPlugin initialised with {} profiles", search.result_count());
}
