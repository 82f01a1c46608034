/// Port for minting identifiers of new entities
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}
