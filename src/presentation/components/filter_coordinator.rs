use super::DraftStore;
use crate::application::dto::{CategorySnapshot, FilterSnapshot};
use crate::domain::entities::{
    AppliedState, CatalogKind, CatalogLoad, FilterCategory, FilterContext, FilterKind,
    FilterOption, NavigationContext, PermissionSet, PredefinedFilterSet,
};
use crate::domain::errors::FilterError;
use crate::domain::repositories::QueryParamStore;
use crate::domain::services::{encoder, initializer, preset_matcher};
use crate::presentation::services::{EventBus, FilterEvent};
use chrono::Utc;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready,
}

/// Handed out when a catalog fetch starts; only the newest ticket per catalog is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    kind: CatalogKind,
    generation: u64,
}

impl LoadTicket {
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }
}

#[derive(Debug, Default)]
struct CatalogSlot {
    generation: u64,
    status: LoadStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetOutcome {
    /// The preset was already active, so every filter was cleared.
    Cleared,
    Applied { policy_ids: Vec<String> },
}

/// Owns the draft filters for one incident-type session and is the only
/// writer of the applied query parameters.
pub struct FilterCoordinator {
    context: FilterContext,
    templates: BTreeMap<FilterKind, FilterCategory>,
    catalogs: BTreeMap<CatalogKind, CatalogSlot>,
    draft: DraftStore,
    query_params: Box<dyn QueryParamStore>,
    events: EventBus,
}

impl FilterCoordinator {
    pub fn new(
        context: FilterContext,
        query_params: Box<dyn QueryParamStore>,
        events: EventBus,
    ) -> Self {
        let templates = FilterKind::ALL
            .into_iter()
            .filter_map(|kind| {
                initializer::session_template(kind, &context).map(|template| (kind, template))
            })
            .collect();

        let mut draft = DraftStore::new();
        for catalog in CatalogKind::ALL {
            draft.replace(catalog.filter_kind(), FilterCategory::MultiSelect(Vec::new()));
        }

        let mut coordinator = Self {
            context,
            templates,
            catalogs: CatalogKind::ALL
                .into_iter()
                .map(|kind| (kind, CatalogSlot::default()))
                .collect(),
            draft,
            query_params,
            events,
        };
        coordinator.sync_from_applied();
        coordinator
    }

    pub fn context(&self) -> &FilterContext {
        &self.context
    }

    pub fn draft(&self, kind: FilterKind) -> Option<&FilterCategory> {
        self.draft.get(kind)
    }

    pub fn draft_store(&self) -> &DraftStore {
        &self.draft
    }

    pub fn applied(&self) -> AppliedState {
        self.query_params.read()
    }

    pub fn any_filters_applied(&self) -> bool {
        self.query_params.read().any_applied()
    }

    fn catalog_ready(&self, kind: FilterKind) -> bool {
        match CatalogKind::try_from(kind) {
            Ok(catalog) => self
                .catalogs
                .get(&catalog)
                .is_some_and(|slot| slot.status == LoadStatus::Ready),
            Err(_) => true,
        }
    }

    /// Re-derive the draft from the applied state. With `ready_only`, remote
    /// catalogs that are still loading or failed keep whatever the draft holds.
    fn derive_from_applied(&mut self, ready_only: bool) {
        let applied = self.query_params.read();
        let mut refreshed = Vec::new();
        for (kind, template) in &self.templates {
            if ready_only && !self.catalog_ready(*kind) {
                continue;
            }
            refreshed.push((*kind, initializer::derive(*kind, template, &applied)));
        }
        for (kind, category) in refreshed {
            self.draft.replace(kind, category);
        }
    }

    fn sync_from_applied(&mut self) {
        self.derive_from_applied(true);
    }

    // ----- catalog loading -------------------------------------------------

    pub fn begin_load(&mut self, kind: CatalogKind) -> LoadTicket {
        let slot = self.catalogs.entry(kind).or_default();
        slot.generation += 1;
        slot.status = LoadStatus::Loading;
        tracing::debug!("Loading {:?} catalog (generation {})", kind, slot.generation);
        LoadTicket {
            kind,
            generation: slot.generation,
        }
    }

    /// Record a finished fetch. Returns `false` when a newer fetch has
    /// superseded `ticket` and the result was dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        load: CatalogLoad<Vec<FilterOption>>,
    ) -> bool {
        let slot = self.catalogs.entry(ticket.kind).or_default();
        if slot.generation != ticket.generation {
            tracing::debug!(
                "Ignoring superseded {:?} catalog (generation {} < {})",
                ticket.kind,
                ticket.generation,
                slot.generation
            );
            return false;
        }

        match load {
            CatalogLoad::Loading => slot.status = LoadStatus::Loading,
            CatalogLoad::Failed(message) => {
                tracing::warn!("{:?} catalog unavailable: {}", ticket.kind, message);
                slot.status = LoadStatus::Failed(message);
            }
            CatalogLoad::Ready(options) => {
                slot.status = LoadStatus::Ready;
                let count = options.len();
                self.templates.insert(
                    ticket.kind.filter_kind(),
                    FilterCategory::MultiSelect(options).unchecked(),
                );
                tracing::info!("Materialized {} {:?} options", count, ticket.kind);
                self.events.publish(FilterEvent::CatalogMaterialized {
                    kind: ticket.kind,
                    options: count,
                });
            }
        }

        self.sync_from_applied();
        true
    }

    pub fn is_loading(&self, kind: FilterKind) -> bool {
        CatalogKind::try_from(kind)
            .ok()
            .and_then(|catalog| self.catalogs.get(&catalog))
            .is_some_and(|slot| slot.status == LoadStatus::Loading)
    }

    pub fn load_error(&self, kind: FilterKind) -> Option<&str> {
        let catalog = CatalogKind::try_from(kind).ok()?;
        match &self.catalogs.get(&catalog)?.status {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn update_permissions(&mut self, permissions: PermissionSet) {
        self.context.permissions = permissions;
        let template = initializer::remediation_template(&self.context);
        let applied = self.query_params.read();
        self.draft.replace(
            FilterKind::ActionTypes,
            initializer::derive(FilterKind::ActionTypes, &template, &applied),
        );
        self.templates.insert(FilterKind::ActionTypes, template);
    }

    // ----- draft edits -----------------------------------------------------

    pub fn toggle_one(&mut self, kind: FilterKind, key: &str) -> bool {
        let toggled = self.draft.toggle_one(kind, key);
        if !toggled {
            tracing::debug!("No {} option {:?} to toggle", kind, key);
        }
        toggled
    }

    pub fn set_all(&mut self, kind: FilterKind, checked: bool) {
        self.draft.set_all(kind, checked);
    }

    pub fn apply_dropdown_selection<S: AsRef<str>>(&mut self, kind: FilterKind, selected: &[S]) {
        self.draft.apply_dropdown_selection(kind, selected);
    }

    pub fn all_checked(&self, kind: FilterKind) -> bool {
        self.draft.all_checked(kind)
    }

    pub fn toggle_all(&mut self, kind: FilterKind) {
        let checked = !self.draft.all_checked(kind);
        self.draft.set_all(kind, checked);
    }

    pub fn all_users_checked(&self) -> bool {
        FilterKind::USER_GROUP
            .into_iter()
            .all(|kind| self.draft.all_checked(kind))
    }

    pub fn toggle_all_users(&mut self) {
        let checked = !self.all_users_checked();
        for kind in FilterKind::USER_GROUP {
            self.draft.set_all(kind, checked);
        }
    }

    // ----- commit / reset / clear -----------------------------------------

    /// Replace the applied state with the draft.
    pub fn commit(&mut self) -> AppliedState {
        let applied = self.draft.to_applied_state();
        self.query_params.write(applied.clone());
        tracing::info!("Committed filters: {}", describe(&applied));
        self.events.publish(FilterEvent::Committed {
            applied: applied.clone(),
            at: Utc::now(),
        });
        applied
    }

    /// Throw away uncommitted edits.
    /// Catalogs that are reloading or failed fall back to their last good options.
    pub fn reset(&mut self) {
        self.derive_from_applied(false);
        tracing::debug!("Draft filters reset to applied state");
    }

    pub fn clear(&mut self) {
        self.draft.set_everything(false);
        self.query_params.write(AppliedState::new());
        tracing::info!("Cleared all filters");
        self.events.publish(FilterEvent::Cleared { at: Utc::now() });
    }

    /// Leaving the filtered view (no search string) clears everything.
    pub fn on_navigation_context_change(&mut self, navigation: &NavigationContext) -> bool {
        if navigation.has_search() {
            return false;
        }
        tracing::debug!("Navigation has no search state, clearing filters");
        self.clear();
        true
    }

    // ----- predefined filter sets -----------------------------------------

    fn policies(&self) -> &[FilterOption] {
        self.draft
            .get(FilterKind::PolicyIds)
            .map(FilterCategory::options)
            .unwrap_or_default()
    }

    pub fn is_predefined_active(&self, set: &PredefinedFilterSet) -> bool {
        preset_matcher::is_active(set, self.policies())
    }

    /// Select the preset, or clear everything if it is already selected.
    /// The policy selection is computed once and drives both the draft and
    /// the `policy-ids` parameter; other parameters are left alone.
    pub fn toggle_predefined(&mut self, set: &PredefinedFilterSet) -> PresetOutcome {
        if self.is_predefined_active(set) {
            self.clear();
            return PresetOutcome::Cleared;
        }

        let selection =
            FilterCategory::MultiSelect(preset_matcher::select(set, self.policies()));
        let param = encoder::encode(FilterKind::PolicyIds, &selection);
        let policy_ids = param
            .as_ref()
            .map(|param| param.values().to_vec())
            .unwrap_or_default();

        let mut applied = self.query_params.read();
        applied.set(FilterKind::PolicyIds, param);
        self.draft.replace(FilterKind::PolicyIds, selection);
        self.query_params.write(applied);

        tracing::info!("Applied predefined filter set: {} policies", policy_ids.len());
        self.events.publish(FilterEvent::PresetApplied {
            policy_ids: policy_ids.clone(),
            at: Utc::now(),
        });
        PresetOutcome::Applied { policy_ids }
    }

    fn named_preset(&self, name: &str) -> Result<PredefinedFilterSet, FilterError> {
        self.context
            .presets
            .iter()
            .find(|preset| preset.name == name)
            .map(|preset| preset.rule.clone())
            .ok_or_else(|| FilterError::UnknownPreset(name.to_string()))
    }

    pub fn is_named_preset_active(&self, name: &str) -> Result<bool, FilterError> {
        Ok(self.is_predefined_active(&self.named_preset(name)?))
    }

    pub fn toggle_named_preset(&mut self, name: &str) -> Result<PresetOutcome, FilterError> {
        let set = self.named_preset(name)?;
        Ok(self.toggle_predefined(&set))
    }

    // ----- consumers -------------------------------------------------------

    pub fn snapshot(&self) -> FilterSnapshot {
        let categories = self
            .draft
            .iter()
            .map(|(kind, category)| CategorySnapshot {
                kind,
                category: category.clone(),
                all_checked: category.all_checked(),
                loading: self.is_loading(kind),
                load_error: self.load_error(kind).map(str::to_string),
            })
            .collect();

        let applied = self.query_params.read();
        FilterSnapshot {
            incident_type: self.context.incident_type,
            categories,
            all_users_checked: self.all_users_checked(),
            any_filters_applied: applied.any_applied(),
            applied,
            taken_at: Utc::now(),
        }
    }
}

fn describe(applied: &AppliedState) -> String {
    if applied.is_empty() {
        return "none".to_string();
    }
    applied
        .iter()
        .map(|(kind, value)| format!("{}={}", kind, value.values().join(",")))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{IncidentType, NamedPreset, ParamValue};
    use crate::infrastructure::routing::InMemoryQueryParams;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    fn policies() -> Vec<FilterOption> {
        (1..=4)
            .map(|i| {
                FilterOption::new(format!("id-{i}"), format!("Policy {i}"))
                    .with_preset_key(format!("P{i}"))
            })
            .collect()
    }

    fn many(values: &[&str]) -> ParamValue {
        ParamValue::Many(values.iter().map(|v| v.to_string()).collect())
    }

    struct Harness {
        coordinator: FilterCoordinator,
        params: InMemoryQueryParams,
        events: Arc<Mutex<Vec<FilterEvent>>>,
    }

    fn harness_with(context: FilterContext, applied: AppliedState) -> Harness {
        let params = InMemoryQueryParams::with_state(applied);
        let bus = EventBus::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        bus.subscribe(move |event| {
            if let Ok(mut events) = sink.lock() {
                events.push(event.clone());
            }
        });
        let coordinator = FilterCoordinator::new(context, Box::new(params.clone()), bus);
        Harness {
            coordinator,
            params,
            events,
        }
    }

    fn loaded(context: FilterContext, applied: AppliedState) -> Harness {
        let mut harness = harness_with(context, applied);
        let ticket = harness.coordinator.begin_load(CatalogKind::Policies);
        harness
            .coordinator
            .finish_load(ticket, CatalogLoad::Ready(policies()));
        let ticket = harness.coordinator.begin_load(CatalogKind::DetectionTags);
        harness.coordinator.finish_load(
            ticket,
            CatalogLoad::Ready(vec![
                FilterOption::new("t1", "Vip"),
                FilterOption::new("t2", "Brand"),
            ]),
        );
        harness
    }

    fn threat() -> FilterContext {
        FilterContext::new(IncidentType::Threat)
    }

    fn checked_keys(coordinator: &FilterCoordinator, kind: FilterKind) -> Vec<String> {
        coordinator
            .draft(kind)
            .map(|category| {
                category
                    .checked()
                    .map(|o| o.value.as_key().unwrap_or(o.label.as_str()).to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn new_session_derives_static_filters_from_url() {
        let applied = AppliedState::new()
            .with(FilterKind::GlobalAttack, ParamValue::One("true".into()))
            .with(FilterKind::ActionTypes, many(&["delete", "block"]))
            .with(FilterKind::PriorityType, many(&["high"]));
        let harness = harness_with(threat(), applied);
        let coordinator = &harness.coordinator;

        assert!(coordinator.all_checked(FilterKind::GlobalAttack));
        assert_eq!(checked_keys(coordinator, FilterKind::ActionTypes), ["delete"]);
        assert_eq!(checked_keys(coordinator, FilterKind::PriorityType), ["high"]);
        assert_eq!(coordinator.draft(FilterKind::PolicyIds).map(|c| c.options().len()), Some(0));
    }

    #[test]
    fn catalog_arrival_checks_applied_policies() {
        let applied = AppliedState::new().with(FilterKind::PolicyIds, many(&["id-2"]));
        let harness = loaded(threat(), applied);
        assert_eq!(checked_keys(&harness.coordinator, FilterKind::PolicyIds), ["id-2"]);
        assert!(harness.events.lock().expect("lock").iter().any(|event| matches!(
            event,
            FilterEvent::CatalogMaterialized { kind: CatalogKind::Policies, options: 4 }
        )));
    }

    #[test]
    fn toggle_against_loading_catalog_is_dropped() {
        let mut harness = harness_with(threat(), AppliedState::new());
        let ticket = harness.coordinator.begin_load(CatalogKind::Policies);
        assert!(harness.coordinator.is_loading(FilterKind::PolicyIds));
        assert!(!harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-1"));

        harness
            .coordinator
            .finish_load(ticket, CatalogLoad::Ready(policies()));
        assert!(!harness.coordinator.is_loading(FilterKind::PolicyIds));
        assert!(checked_keys(&harness.coordinator, FilterKind::PolicyIds).is_empty());
    }

    #[test]
    fn failed_reload_keeps_previous_draft() {
        let mut harness = loaded(threat(), AppliedState::new());
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-3");

        let ticket = harness.coordinator.begin_load(CatalogKind::Policies);
        harness
            .coordinator
            .finish_load(ticket, CatalogLoad::Failed("gateway timeout".into()));

        assert_eq!(checked_keys(&harness.coordinator, FilterKind::PolicyIds), ["id-3"]);
        assert_eq!(
            harness.coordinator.load_error(FilterKind::PolicyIds),
            Some("gateway timeout")
        );
        assert_eq!(harness.coordinator.load_error(FilterKind::DetectionTags), None);
    }

    #[test]
    fn reset_during_reload_discards_uncommitted_toggle() {
        let mut harness = loaded(threat(), AppliedState::new());
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-2");
        harness.coordinator.begin_load(CatalogKind::Policies);

        harness.coordinator.reset();
        assert!(checked_keys(&harness.coordinator, FilterKind::PolicyIds).is_empty());
        assert_eq!(
            harness.coordinator.draft(FilterKind::PolicyIds).map(|c| c.options().len()),
            Some(4)
        );
        assert!(harness.coordinator.commit().is_empty());
    }

    #[test]
    fn reset_after_failed_reload_restores_applied_policies() {
        let applied = AppliedState::new().with(FilterKind::PolicyIds, many(&["id-1"]));
        let mut harness = loaded(threat(), applied);
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-1");
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-4");

        let ticket = harness.coordinator.begin_load(CatalogKind::Policies);
        harness
            .coordinator
            .finish_load(ticket, CatalogLoad::Failed("gateway timeout".into()));
        harness.coordinator.reset();

        assert_eq!(checked_keys(&harness.coordinator, FilterKind::PolicyIds), ["id-1"]);
    }

    #[test]
    fn reset_before_first_load_keeps_empty_catalog() {
        let mut harness = harness_with(threat(), AppliedState::new());
        harness.coordinator.begin_load(CatalogKind::DetectionTags);
        harness.coordinator.reset();
        assert_eq!(
            harness.coordinator.draft(FilterKind::DetectionTags).map(|c| c.options().len()),
            Some(0)
        );
    }

    #[test]
    fn superseded_fetch_is_ignored() {
        let mut harness = harness_with(threat(), AppliedState::new());
        let stale = harness.coordinator.begin_load(CatalogKind::Departments);
        let fresh = harness.coordinator.begin_load(CatalogKind::Departments);

        assert!(harness.coordinator.finish_load(
            fresh,
            CatalogLoad::Ready(vec![FilterOption::new("7", "Legal")])
        ));
        assert!(!harness.coordinator.finish_load(
            stale,
            CatalogLoad::Ready(vec![FilterOption::new("1", "Old")])
        ));
        let labels: Vec<_> = harness
            .coordinator
            .draft(FilterKind::DepartmentId)
            .map(|c| c.options().iter().map(|o| o.label.clone()).collect())
            .unwrap_or_default();
        assert_eq!(labels, ["Legal"]);
    }

    #[test]
    fn commit_overwrites_every_key() {
        let applied = AppliedState::new()
            .with(FilterKind::PolicyIds, many(&["id-1"]))
            .with(FilterKind::Bookmark, ParamValue::One("bookmarked".into()));
        let mut harness = loaded(threat(), applied);

        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-1");
        harness.coordinator.toggle_one(FilterKind::Bookmark, "");
        harness.coordinator.toggle_one(FilterKind::RecipientEngagementReply, "");
        let committed = harness.coordinator.commit();

        assert_eq!(
            committed,
            AppliedState::new()
                .with(FilterKind::RecipientEngagementReply, ParamValue::One("true".into()))
        );
        assert_eq!(harness.params.snapshot(), committed);
        assert_eq!(harness.params.writes(), 1);
        assert!(harness.coordinator.any_filters_applied());
    }

    #[test]
    fn reset_discards_uncommitted_edits() {
        let applied = AppliedState::new().with(FilterKind::DetectionTags, many(&["t1"]));
        let mut harness = loaded(threat(), applied);

        harness.coordinator.apply_dropdown_selection(FilterKind::DetectionTags, &["t2"]);
        harness.coordinator.toggle_one(FilterKind::TargetedAttack, "");
        harness.coordinator.reset();

        assert_eq!(checked_keys(&harness.coordinator, FilterKind::DetectionTags), ["t1"]);
        assert!(!harness.coordinator.all_checked(FilterKind::TargetedAttack));
    }

    #[test]
    fn reset_right_after_commit_is_a_noop() {
        let mut harness = loaded(threat(), AppliedState::new());
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-4");
        harness.coordinator.toggle_one(FilterKind::SclScore, "Low (0-1)");
        harness.coordinator.toggle_one(FilterKind::UserStatus, "");
        harness.coordinator.toggle_one(FilterKind::ActionTypes, "banner");
        harness.coordinator.toggle_one(FilterKind::ActionTypes, "quarantine");
        harness.coordinator.commit();

        let before = harness.coordinator.draft_store().clone();
        harness.coordinator.reset();
        assert_eq!(harness.coordinator.draft_store(), &before);
    }

    #[test]
    fn scl_commit_flattens_buckets() {
        let mut harness = harness_with(threat(), AppliedState::new());
        harness
            .coordinator
            .apply_dropdown_selection(FilterKind::SclScore, &["Medium (2-4)", "Trusted (-1)"]);
        let committed = harness.coordinator.commit();
        assert_eq!(
            committed.get(FilterKind::SclScore),
            Some(&many(&["-1", "2", "3", "4"]))
        );
    }

    #[test]
    fn users_group_moves_together() {
        let mut harness = harness_with(threat(), AppliedState::new());
        harness.coordinator.toggle_one(FilterKind::UserStatus, "");
        assert!(!harness.coordinator.all_users_checked());

        harness.coordinator.toggle_all_users();
        assert!(harness.coordinator.all_users_checked());
        harness.coordinator.toggle_all_users();
        for kind in FilterKind::USER_GROUP {
            assert!(!harness.coordinator.draft(kind).is_some_and(FilterCategory::any_checked));
        }
    }

    #[test]
    fn toggle_all_flips_between_all_and_none() {
        let mut harness = loaded(threat(), AppliedState::new());
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-1");
        harness.coordinator.toggle_all(FilterKind::PolicyIds);
        assert!(harness.coordinator.all_checked(FilterKind::PolicyIds));
        harness.coordinator.toggle_all(FilterKind::PolicyIds);
        assert!(checked_keys(&harness.coordinator, FilterKind::PolicyIds).is_empty());
    }

    #[test]
    fn empty_navigation_clears_dirty_draft_and_url() {
        let applied = AppliedState::new().with(FilterKind::PolicyIds, many(&["id-1"]));
        let mut harness = loaded(threat(), applied);
        harness.coordinator.toggle_one(FilterKind::DetectionTags, "t2");
        harness.coordinator.toggle_one(FilterKind::GlobalAttack, "");
        harness.coordinator.toggle_one(FilterKind::ActionState, "failed");

        assert!(!harness
            .coordinator
            .on_navigation_context_change(&NavigationContext::new("?policy-ids=id-1")));
        assert!(harness
            .coordinator
            .on_navigation_context_change(&NavigationContext::empty()));

        for (kind, category) in harness.coordinator.draft_store().iter() {
            assert!(!category.any_checked(), "{kind} still has a selection");
        }
        assert!(harness.params.snapshot().is_empty());
        assert!(!harness.coordinator.any_filters_applied());
        assert!(harness
            .events
            .lock()
            .expect("lock")
            .iter()
            .any(|event| matches!(event, FilterEvent::Cleared { .. })));
    }

    #[test]
    fn preset_matches_exact_selection() {
        let mut harness = loaded(threat(), AppliedState::new());
        let preset = PredefinedFilterSet::Include(vec!["P1".into(), "P2".into()]);

        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-1");
        assert!(!harness.coordinator.is_predefined_active(&preset));
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-2");
        assert!(harness.coordinator.is_predefined_active(&preset));
        harness.coordinator.toggle_one(FilterKind::PolicyIds, "id-3");
        assert!(!harness.coordinator.is_predefined_active(&preset));
    }

    #[test]
    fn preset_writes_draft_and_policy_param_together() {
        let applied = AppliedState::new().with(FilterKind::Bookmark, ParamValue::One("bookmarked".into()));
        let mut harness = loaded(threat(), applied);
        let preset = PredefinedFilterSet::Exclude(vec!["P2".into()]);

        let outcome = harness.coordinator.toggle_predefined(&preset);
        let expected = vec!["id-1".to_string(), "id-3".into(), "id-4".into()];
        assert_eq!(outcome, PresetOutcome::Applied { policy_ids: expected.clone() });
        assert_eq!(checked_keys(&harness.coordinator, FilterKind::PolicyIds), expected);

        let url = harness.params.snapshot();
        assert_eq!(url.get(FilterKind::PolicyIds), Some(&ParamValue::Many(expected)));
        assert!(url.contains_key(FilterKind::Bookmark));
        assert!(harness.coordinator.is_predefined_active(&preset));
    }

    #[test]
    fn toggling_active_preset_clears() {
        let mut harness = loaded(threat(), AppliedState::new());
        let preset = PredefinedFilterSet::Include(vec!["P1".into(), "P2".into()]);
        harness.coordinator.toggle_predefined(&preset);

        assert_eq!(
            harness.coordinator.toggle_predefined(&preset),
            PresetOutcome::Cleared
        );
        assert!(checked_keys(&harness.coordinator, FilterKind::PolicyIds).is_empty());
        assert!(!harness.params.snapshot().contains_key(FilterKind::PolicyIds));
    }

    #[test]
    fn named_presets_come_from_context() {
        let context = threat().with_presets(vec![NamedPreset::new(
            "Malware only",
            PredefinedFilterSet::Include(vec!["P1".into()]),
        )]);
        let mut harness = loaded(context, AppliedState::new());

        assert!(matches!(
            harness.coordinator.toggle_named_preset("Malware only"),
            Ok(PresetOutcome::Applied { .. })
        ));
        assert!(matches!(harness.coordinator.is_named_preset_active("Malware only"), Ok(true)));
        assert!(matches!(
            harness.coordinator.toggle_named_preset("Nope"),
            Err(FilterError::UnknownPreset(name)) if name == "Nope"
        ));
    }

    #[test]
    fn permission_change_rebuilds_remediation_actions() {
        let applied = AppliedState::new().with(FilterKind::ActionTypes, many(&["banner"]));
        let mut harness = harness_with(threat(), applied);
        assert!(checked_keys(&harness.coordinator, FilterKind::ActionTypes).is_empty());

        harness.coordinator.update_permissions(PermissionSet {
            warning_banner_enabled: true,
            ..PermissionSet::default()
        });
        assert_eq!(checked_keys(&harness.coordinator, FilterKind::ActionTypes), ["banner"]);
    }

    #[test]
    fn snapshot_reports_loading_and_errors() {
        let mut harness = harness_with(threat(), AppliedState::new());
        harness.coordinator.begin_load(CatalogKind::Policies);
        let ticket = harness.coordinator.begin_load(CatalogKind::ReceivedFolders);
        harness
            .coordinator
            .finish_load(ticket, CatalogLoad::Failed("boom".into()));

        let snapshot = harness.coordinator.snapshot();
        assert_eq!(snapshot.categories.len(), FilterKind::ALL.len());
        assert!(snapshot.category(FilterKind::PolicyIds).is_some_and(|c| c.loading));
        assert_eq!(
            snapshot
                .category(FilterKind::ReceivedFolders)
                .and_then(|c| c.load_error.as_deref()),
            Some("boom")
        );
        assert!(!snapshot.any_filters_applied);
    }

    proptest! {
        #[test]
        fn commit_then_reset_round_trips(
            policy_toggles in proptest::collection::vec(1usize..=4, 0..8),
            scl_toggles in proptest::collection::vec(0usize..5, 0..5),
            flags in proptest::collection::vec(any::<bool>(), 6),
        ) {
            let mut harness = loaded(threat(), AppliedState::new());
            for i in policy_toggles {
                harness.coordinator.toggle_one(FilterKind::PolicyIds, &format!("id-{i}"));
            }
            let scl_labels: Vec<String> = harness
                .coordinator
                .draft(FilterKind::SclScore)
                .map(|c| c.options().iter().map(|o| o.label.clone()).collect())
                .unwrap_or_default();
            for i in scl_toggles {
                harness.coordinator.toggle_one(FilterKind::SclScore, &scl_labels[i]);
            }
            let toggles = [
                FilterKind::UserStatus,
                FilterKind::RecipientEngagementForward,
                FilterKind::RecipientEngagementReply,
                FilterKind::GlobalAttack,
                FilterKind::TargetedAttack,
                FilterKind::Bookmark,
            ];
            for (kind, flip) in toggles.into_iter().zip(flags) {
                if flip {
                    harness.coordinator.toggle_one(kind, "");
                }
            }

            harness.coordinator.commit();
            let before = harness.coordinator.draft_store().clone();
            harness.coordinator.reset();
            prop_assert_eq!(harness.coordinator.draft_store(), &before);
        }

        #[test]
        fn set_all_false_then_commit_omits_key(kind_index in 0usize..14) {
            let kind = FilterKind::ALL[kind_index];
            let mut harness = loaded(threat(), AppliedState::new());
            harness.coordinator.set_all(kind, true);
            harness.coordinator.set_all(kind, false);
            let committed = harness.coordinator.commit();
            prop_assert!(!committed.contains_key(kind));
        }
    }
}
