use crate::imports::*;

/// Signed in user, persisted by the login flow.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    pub token: SecretString,
}

impl Serialize for UserInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("UserInfo", 5)?;
        s.serialize_field("_id", &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("email", &self.email)?;
        s.serialize_field("isAdmin", &self.is_admin)?;
        s.serialize_field("token", &self.token.expose_secret())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_survives_a_round_trip_but_not_debug() {
        let raw = r#"{"_id":"u1","name":"Ada","email":"ada@example.org","isAdmin":true,"token":"t0k3n"}"#;
        let user: UserInfo = serde_json::from_str(raw).unwrap();

        assert!(user.is_admin);
        assert_eq!(user.token.expose_secret(), "t0k3n");
        assert!(!format!("{:?}", user).contains("t0k3n"));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["token"], "t0k3n");
        assert_eq!(json["isAdmin"], true);
    }
}
