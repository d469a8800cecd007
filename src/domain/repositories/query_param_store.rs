use crate::domain::entities::AppliedState;

/// The routing layer's view of the applied filters.
pub trait QueryParamStore {
    fn read(&self) -> AppliedState;
    fn write(&mut self, state: AppliedState);
}
