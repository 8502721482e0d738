//! In-memory feature catalog.
//!
//! Mutations are expressed as [`Action`]s applied by the pure reducer
//! [`apply`]. [`FeatureStore`] owns the collection, dispatches actions, and
//! notifies subscribers with the new snapshot after every dispatch.

use tracing::debug;

use crate::data::Feature;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append without a uniqueness check.
    Add(Feature),
    /// Replace the first entry with the same id; no-op when absent.
    Update(Feature),
    /// Remove every entry with this id.
    Delete(String),
    /// Update-or-add per incoming entry, left to right.
    ImportMerge(Vec<Feature>),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Update(_) => "update",
            Action::Delete(_) => "delete",
            Action::ImportMerge(_) => "import_merge",
        }
    }
}

pub fn apply(features: &mut Vec<Feature>, action: Action) {
    match action {
        Action::Add(feature) => features.push(feature),
        Action::Update(feature) => {
            if let Some(existing) = features.iter_mut().find(|f| f.id == feature.id) {
                *existing = feature;
            }
        }
        Action::Delete(id) => features.retain(|f| f.id != id),
        Action::ImportMerge(incoming) => {
            for feature in incoming {
                match features.iter_mut().find(|f| f.id == feature.id) {
                    Some(existing) => *existing = feature,
                    None => features.push(feature),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[Feature])>;

#[derive(Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        apply(&mut self.features, action);
        debug!(action = name, count = self.features.len(), "store updated");

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.features);
        }
    }

    pub fn add(&mut self, feature: Feature) {
        self.dispatch(Action::Add(feature));
    }

    pub fn update(&mut self, feature: Feature) {
        self.dispatch(Action::Update(feature));
    }

    pub fn delete(&mut self, id: &str) {
        self.dispatch(Action::Delete(id.to_string()));
    }

    pub fn import_merge(&mut self, incoming: Vec<Feature>) {
        self.dispatch(Action::ImportMerge(incoming));
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Feature]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sub, _)| *sub != id);
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl std::fmt::Debug for FeatureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureStore")
            .field("features", &self.features)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
