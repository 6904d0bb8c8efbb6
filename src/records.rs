use std::path::Path;

use err::CustomError;
use manager::AttendanceManager;

pub mod err;
pub mod manager;
pub mod report;
pub mod student;
pub mod user;
mod validation;

/// Build the manager with the users from the credential store at `users_path`.
pub fn open_manager(users_path: &Path) -> Result<AttendanceManager, CustomError> {
    let users = user::load_users(users_path)?;
    Ok(AttendanceManager::new(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_manager() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("users.xml");
        fs::write(
            &file_path,
            "<users><user><login>t</login><password>1</password><type>teacher</type></user></users>",
        )
        .unwrap();

        let manager = open_manager(&file_path).unwrap();
        assert!(manager.authenticate("t", "1").is_ok());
        assert!(manager.list_students().is_empty());
    }

    #[test]
    fn test_open_manager_bad_file() {
        let temp_dir = tempdir().unwrap();
        // a directory exists but cannot be read as a file
        assert!(matches!(
            open_manager(temp_dir.path()),
            Err(CustomError::FileReadError(_))
        ));
    }
}
