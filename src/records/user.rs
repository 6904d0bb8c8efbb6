use std::{collections::HashMap, fs, io, path::Path};

use log::{info, warn};
use serde::Deserialize;

use super::err::CustomError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserType {
    Student,
    Teacher,
    /// kept verbatim, the session refuses to open a menu for it
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub password: String,
    pub user_type: UserType,
}

/// Root of users.xml, any root tag name is accepted
#[derive(Deserialize)]
struct UsersDocument {
    #[serde(rename = "user", default)]
    users: Vec<UserElement>,
}

// one <user> element
#[derive(Deserialize)]
struct UserElement {
    login: String,
    password: String,
    #[serde(rename = "type")]
    user_type: String,
}

pub type Users = HashMap<String, User>;

impl From<&str> for UserType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "student" => UserType::Student,
            "teacher" => UserType::Teacher,
            other => UserType::Unknown(other.to_string()),
        }
    }
}

impl User {
    pub fn new(login: String, password: String, user_type: UserType) -> Self {
        Self {
            login,
            password,
            user_type,
        }
    }
}

/// Load the credential store.
///
/// # Arguments
///
/// * `path` - xml file of `<user>` elements, each with `<login>`,
///   `<password>` and `<type>` children
///
/// # Returns
///
/// A map from login to user. A missing file gives an empty map; an
/// unreadable or malformed file, or a repeated login, is an error.
pub fn load_users(path: &Path) -> Result<Users, CustomError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found, starting without users", path.display());
            return Ok(Users::new());
        }
        Err(e) => return Err(e.into()),
    };
    parse_users(&text)
}

fn parse_users(xml: &str) -> Result<Users, CustomError> {
    let document: UsersDocument = quick_xml::de::from_str(xml)?;
    let mut users = Users::new();

    for UserElement {
        login,
        password,
        user_type,
    } in document.users
    {
        let user_type = UserType::from(user_type.as_str());
        if let UserType::Unknown(other) = &user_type {
            warn!("user {} has unrecognized type {:?}", login, other);
        }
        if users.contains_key(&login) {
            return Err(CustomError::UserDataError(format!(
                "повторяющийся логин {}",
                login
            )));
        }
        users.insert(login.clone(), User::new(login, password, user_type));
    }

    info!("loaded {} users", users.len());
    Ok(users)
}
