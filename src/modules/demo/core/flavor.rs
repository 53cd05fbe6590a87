use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The demo persona whose fixed strings the service answers with.
///
/// The nginx harness fronts two sibling backends that expose the same routes
/// with different wording. Both share the same latency profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    #[default]
    Laravel,
    SpringBoot,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown flavor `{0}`, expected `laravel` or `springboot`")]
pub struct UnknownFlavor(pub String);

impl Flavor {
    pub fn root_log(self) -> &'static str {
        match self {
            Flavor::Laravel => "laravel-nginx-demo root hit",
            Flavor::SpringBoot => "Spring Boot root endpoint called",
        }
    }

    pub fn root_body(self) -> &'static str {
        match self {
            Flavor::Laravel => "laravel-nginx-demo ok",
            Flavor::SpringBoot => "springboot-nginx-demo ok",
        }
    }

    pub fn work_log(self) -> &'static str {
        match self {
            Flavor::Laravel => "laravel-nginx-demo work hit",
            Flavor::SpringBoot => "Spring Boot work endpoint called",
        }
    }

    pub fn work_body(self) -> &'static str {
        match self {
            Flavor::Laravel => "laravel-nginx-demo work done",
            Flavor::SpringBoot => "springboot-nginx-demo work done",
        }
    }
}

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "laravel" => Ok(Flavor::Laravel),
            "springboot" | "spring-boot" => Ok(Flavor::SpringBoot),
            _ => Err(UnknownFlavor(s.to_string())),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Laravel => f.write_str("laravel"),
            Flavor::SpringBoot => f.write_str("springboot"),
        }
    }
}
