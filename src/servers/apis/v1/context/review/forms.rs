//! API forms for the [`review`](crate::servers::apis::v1::context::review)
//! API context.
use serde::{Deserialize, Serialize};

/// The form to add a review. The author is taken from the access token, not
/// from the form.
#[derive(Serialize, Deserialize, Debug)]
pub struct AddReviewForm {
    /// The comment left by the author.
    pub text: String,
    /// The rating, from 1 (worst) to 5 (best).
    pub rating: i64,
    /// The id of the reviewed place.
    pub place_id: String,
}

/// The form to update a review. Absent attributes are kept unchanged. The
/// author and the reviewed place cannot be changed.
#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateReviewForm {
    /// The new comment.
    pub text: Option<String>,
    /// The new rating, from 1 (worst) to 5 (best).
    pub rating: Option<i64>,
}
