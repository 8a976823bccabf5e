use super::NodeId;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum UserType {
    Bot,
    Organization,
    User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub node_id: NodeId,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub site_admin: bool,
}

#[cfg(test)]
mod test {
    use super::{User, UserType};

    #[test]
    fn user() {
        const USER_JSON: &str = r#"
            {
                "login": "Codertocat",
                "id": 21031067,
                "node_id": "MDQ6VXNlcjIxMDMxMDY3",
                "avatar_url": "https://avatars1.githubusercontent.com/u/21031067?v=4",
                "gravatar_id": "",
                "url": "https://api.github.com/users/Codertocat",
                "html_url": "https://github.com/Codertocat",
                "followers_url": "https://api.github.com/users/Codertocat/followers",
                "repos_url": "https://api.github.com/users/Codertocat/repos",
                "type": "User",
                "site_admin": false
            }
        "#;

        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.user_type, UserType::User);
        assert_eq!(user.html_url, "https://github.com/Codertocat");
    }

    #[test]
    fn bot() {
        const BOT_JSON: &str = r#"
            {
                "login": "dependabot[bot]",
                "id": 49699333,
                "node_id": "MDM6Qm90NDk2OTkzMzM=",
                "avatar_url": "https://avatars.githubusercontent.com/in/29110?v=4",
                "gravatar_id": null,
                "url": "https://api.github.com/users/dependabot%5Bbot%5D",
                "html_url": "https://github.com/apps/dependabot",
                "type": "Bot",
                "site_admin": false
            }
        "#;

        let user: User = serde_json::from_str(BOT_JSON).unwrap();
        assert_eq!(user.user_type, UserType::Bot);
        assert!(user.gravatar_id.is_none());
    }
}
