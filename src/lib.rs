pub mod modules {
    pub mod demo {
        pub mod core {
            pub mod flavor;
        }
        pub mod use_cases {
            pub mod root {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod work {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
