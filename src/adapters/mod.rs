// Adapters layer: concrete implementations for the Google Ads REST API and OAuth.

pub mod google_ads;
pub mod oauth;

pub use google_ads::GoogleAdsClient;
pub use oauth::OAuthClient;
