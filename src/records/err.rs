/// Errors of operations on student records.
///
/// The `Display` text is what gets shown to the user.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// blank or missing name
    #[error("Имя студента не может быть пустым.")]
    EmptyName,
    /// email rejected by the validator
    #[error("Некорректный формат email. Попробуйте снова.")]
    InvalidEmail,
    /// no student with this id
    #[error("Студент с таким идентификатором не найден.")]
    StudentNotFound,
    /// subject outside the fixed subject set, carries the valid names
    #[error("Неверный предмет. Доступные предметы:\n{}", .0.join("\n"))]
    InvalidSubject(Vec<&'static str>),
}

/// Login failures.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Пользователь не найден.")]
    UserNotFound,
    #[error("Неверный пароль.")]
    WrongPassword,
}

/// Errors while reading console input.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// stdin reached EOF
    #[error("ввод завершён")]
    Closed,
    #[error("ошибка чтения ввода: {0}")]
    Io(#[from] std::io::Error),
    #[error("Некорректное число: {0}")]
    InvalidNumber(String),
    #[error("Некорректная дата: {0}")]
    InvalidDate(String),
}

impl InputError {
    /// Whether the user can simply be asked again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidNumber(_) | Self::InvalidDate(_))
    }
}

/// Startup errors, raised while loading the credential store.
#[derive(thiserror::Error, Debug)]
pub enum CustomError {
    /// the file exists but could not be read
    #[error("Не удалось прочитать файл: {0}")]
    FileReadError(#[from] std::io::Error),
    /// malformed xml, or a user entry without login, password or type
    #[error("Не удалось разобрать xml: {0}")]
    XmlParseError(#[from] quick_xml::DeError),
    /// well-formed xml with unexpected data, e.g. a repeated login
    #[error("Ошибка данных в файле пользователей: {0}")]
    UserDataError(String),
}
