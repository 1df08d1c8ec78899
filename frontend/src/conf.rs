// Configuration definitions, loading and tests
//
// There is no process environment in the browser, so overrides are read
// from the build environment with `option_env!`.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::rc::Rc;

static DEFAULTS: &str = include_str!("../conf/app.yaml");

pub type ConfCtx = Rc<Conf>;

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("Failed to load configuration")]
    Config(#[from] config::ConfigError),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Conf {
    pub api: ApiConf,
    pub session: SessionConf,
    pub toasts: ToastConf,
    pub log: LogConf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiConf {
    pub base_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionConf {
    pub storage_key: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ToastConf {
    pub timeout_ms: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LogConf {
    pub level: String,
}

type Overrides = [(&'static str, Option<&'static str>)];

fn build_overrides() -> [(&'static str, Option<&'static str>); 4] {
    [
        ("api.base_url", option_env!("LIBRARY_ADMIN__API__BASE_URL")),
        (
            "session.storage_key",
            option_env!("LIBRARY_ADMIN__SESSION__STORAGE_KEY"),
        ),
        (
            "toasts.timeout_ms",
            option_env!("LIBRARY_ADMIN__TOASTS__TIMEOUT_MS"),
        ),
        ("log.level", option_env!("LIBRARY_ADMIN__LOG__LEVEL")),
    ]
}

impl Conf {
    pub fn load() -> Result<Self, ConfError> {
        Self::from_sources(DEFAULTS, &build_overrides())
    }

    fn from_sources(yaml: &str, overrides: &Overrides) -> Result<Self, ConfError> {
        let mut builder = Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml));
        for (key, value) in overrides {
            builder = builder.set_override_option(*key, value.map(str::to_owned))?;
        }

        Ok(builder.build()?.try_deserialize::<Conf>()?)
    }
}
