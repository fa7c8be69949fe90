/// Plain-text liveness greeting.
///
/// `GET /`
pub async fn greeting() -> &'static str {
    "halo world"
}
