pub mod application {
    pub mod session {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod submit_prompt;
        pub mod update_persona;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod generation {
        pub mod errors;
        pub mod model;
        pub mod request_builder;
        pub mod services;
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod submit_prompt;
            pub mod update_persona;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
