//! Member model → entity mapper

use roster_core::entities::Member;
use roster_core::value_objects::MemberId;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.id),
            email: model.email,
            full_name: model.full_name,
            is_admin: model.is_admin,
        }
    }
}
