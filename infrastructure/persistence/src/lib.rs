pub mod product {
    pub mod repository;
}
