use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::entities::Coordinates;
use crate::error::Error;
use crate::external::places::{DESTINATION_FALLBACK, SOURCE_FALLBACK};
use crate::views::Canvas;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub source_fallback: Coordinates,
    pub destination_fallback: Coordinates,
    pub canvas: Canvas,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            source_fallback: SOURCE_FALLBACK,
            destination_fallback: DESTINATION_FALLBACK,
            canvas: Canvas::default(),
        }
    }
}

impl Config {
    /// Reads `ROAMER_*` variables; unset ones keep their defaults.
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();

        Ok(Self {
            addr: var_or("ROAMER_ADDR", defaults.addr)?,
            source_fallback: var_or("ROAMER_SOURCE_FALLBACK", defaults.source_fallback)?,
            destination_fallback: var_or(
                "ROAMER_DESTINATION_FALLBACK",
                defaults.destination_fallback,
            )?,
            canvas: Canvas {
                width: var_or("ROAMER_MAP_WIDTH", defaults.canvas.width)?,
                height: var_or("ROAMER_MAP_HEIGHT", defaults.canvas.height)?,
            },
        })
    }
}

fn var_or<T>(key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    Error: From<T::Err>,
{
    match env::var(key) {
        Ok(value) => Ok(value.parse()?),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}

#[test]
fn from_env_test() {
    // single test so the variables are not raced by parallel tests
    env::remove_var("ROAMER_ADDR");
    env::remove_var("ROAMER_SOURCE_FALLBACK");
    env::remove_var("ROAMER_DESTINATION_FALLBACK");
    env::remove_var("ROAMER_MAP_WIDTH");
    env::remove_var("ROAMER_MAP_HEIGHT");

    assert_eq!(Config::from_env().unwrap(), Config::default());

    env::set_var("ROAMER_ADDR", "0.0.0.0:8080");
    env::set_var("ROAMER_SOURCE_FALLBACK", "1.0,2.0");
    env::set_var("ROAMER_MAP_WIDTH", "800");

    let config = Config::from_env().unwrap();
    assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    assert_eq!(config.source_fallback, Coordinates::new(1.0, 2.0));
    assert_eq!(config.destination_fallback, DESTINATION_FALLBACK);
    assert_eq!(config.canvas.width, 800.0);

    env::set_var("ROAMER_MAP_HEIGHT", "tall");
    assert_eq!(Config::from_env().unwrap_err().code, 2);

    env::remove_var("ROAMER_ADDR");
    env::remove_var("ROAMER_SOURCE_FALLBACK");
    env::remove_var("ROAMER_MAP_WIDTH");
    env::remove_var("ROAMER_MAP_HEIGHT");
}
