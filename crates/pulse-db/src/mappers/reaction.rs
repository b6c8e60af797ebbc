//! Reaction entity <-> model mapper

use pulse_core::{Reaction, ReactionCount};

use crate::models::{ReactionCountModel, ReactionModel};

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            content_id: model.content_id,
            user_id: model.user_id,
            user_view_count: model.user_view_count,
            user_has_activated: model.user_has_activated,
            user_has_liked: model.user_has_liked,
            user_has_super_liked: model.user_has_super_liked,
            user_has_disliked: model.user_has_disliked,
            user_has_super_disliked: model.user_has_super_disliked,
            user_has_reported: model.user_has_reported,
            user_bookmark_category: model.user_bookmark_category,
            rating: model.rating,
            user_locale: model.user_locale,
            update_count: model.update_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReactionCountModel to ReactionCount
impl From<ReactionCountModel> for ReactionCount {
    fn from(model: ReactionCountModel) -> Self {
        ReactionCount {
            content_id: model.content_id,
            count: model.count,
        }
    }
}
