use crit_fumble_test_utils::prelude::*;

use crate::model::user::UserDto;


async fn user_dto(test: &TestContext, discord_id: &str, admin: bool) -> Result<UserDto, TestError> {
    let user = if admin {
        test.user().insert_admin(discord_id).await?
    } else {
        test.user().insert_user(discord_id).await?
    };

    Ok(UserDto::from(user))
}
