pub mod application {
    pub mod auth {
        pub mod login;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_low_stock;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod credentials;
        pub mod errors;
        pub mod use_cases {
            pub mod login;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_low_stock;
            pub mod update;
        }
    }
}
