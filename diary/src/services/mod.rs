mod diary;
mod weather_refresh;

pub use diary::{DiaryService, ResolvedWeather, WeatherSource};
pub use weather_refresh::WeatherRefreshManager;
