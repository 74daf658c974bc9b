pub mod application {
    pub mod auth {
        pub mod login;
        pub mod logout;
        pub mod register;
    }
    pub mod profile {
        pub mod get;
        pub mod set_theme;
        pub mod update_name;
    }
    pub mod shopping_item {
        pub mod add;
        pub mod remove;
        pub mod update;
    }
    pub mod shopping_list {
        pub mod delete_record;
        pub mod finalize;
        pub mod get_current;
        pub mod get_history;
        pub mod resume;
        pub mod save_draft;
        pub mod update_balance;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
            pub mod register;
        }
    }
    pub mod profile {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get;
            pub mod set_theme;
            pub mod update_name;
        }
    }
    pub mod shared {
        pub mod format;
        pub mod value_objects;
    }
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
            pub mod update;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod delete_record;
            pub mod finalize;
            pub mod get_current;
            pub mod get_history;
            pub mod resume;
            pub mod save_draft;
            pub mod update_balance;
        }
    }
}
