//! One provider per upstream API. Each owns request construction and
//! validation and hands the extracted payload to its serializer.

mod facebook;
mod foursquare;
mod google;
mod yelp;

pub use facebook::FacebookProvider;
pub use foursquare::FoursquareProvider;
pub use google::GoogleProvider;
pub use yelp::YelpProvider;

use benchplaces_core::PlaceSummary;
use serde_json::Value;

use crate::capability::DetailsFetcher;
use crate::error::SourceError;

/// Fills `url` on each search result from a follow-up details lookup,
/// reading `url_field` from the details payload.
///
/// Issues exactly one request per result, one after another. No ordering
/// between lookups is required, so they may run concurrently later.
///
/// # Errors
///
/// Stops at the first failed lookup and returns its error.
pub(crate) async fn enrich_urls<D>(
    fetcher: &D,
    places: &mut [PlaceSummary],
    url_field: &str,
) -> Result<(), SourceError>
where
    D: DetailsFetcher + ?Sized,
{
    for place in places.iter_mut() {
        let details = fetcher.get_place_details(&place.place_id, &[]).await?;
        place.url = details
            .raw
            .get(url_field)
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    Ok(())
}
