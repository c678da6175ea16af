//! application entry point

use crate::server::model::config::{Env, ServerConfig};
use anyhow::Context;
use log::info;
use std::env;
use std::path::Path;

mod server;

const DOTENV_LOADING_FAILED_MSG: &str = "failed to load envs from dotenv files, aborting";
const CONFIG_LOADING_FAILED_MSG: &str = "failed to load server config, aborting";

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = match env::var("APP_ENV") {
        Ok(v) => v.parse::<Env>()?,
        Err(_) => Env::Dev, // default dev env if absent
    };

    match env {
        Env::Prod | Env::Stg => {} // provided by the deployment
        Env::Dev => {
            dotenvy::from_path(Path::new(".env.dev")).context(DOTENV_LOADING_FAILED_MSG)?;
        }
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = ServerConfig::from_env().context(CONFIG_LOADING_FAILED_MSG)?;
    info!("App is starting in env={} on {}", env, config.addr);

    let result = server::run(config, server::AppState::default()).await;
    info!("App stopped");
    log::logger().flush();
    result.context("server terminated abnormally")
}
