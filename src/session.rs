use std::io::{BufRead, Write};

use log::{debug, info};

use crate::records::{
    err::{InputError, RecordError},
    manager::AttendanceManager,
    report,
    student::{AttendanceRecord, Student},
    user::UserType,
};

pub mod console;
pub mod state;

use console::Console;
use state::{Event, SessionState};

const STUDENT_MENU: &str = "
Меню для ученика:
1. Отобразить оценки
2. Отобразить посещаемость
3. Выход из профиля";

const TEACHER_MENU: &str = "
Меню для преподавателя:
1. Добавить студента
2. Удалить студента
3. Редактировать студента
4. Отобразить список студентов
5. Добавить запись о посещении
6. Отобразить записи о посещении
7. Добавить оценку
8. Отобразить оценки
9. Выход из профиля";

const CHOICE_PROMPT: &str = "Введите номер действия: ";
const ID_PROMPT: &str = "Введите ID студента: ";

/// Drives the console state machine against one `AttendanceManager`.
pub struct Session<R, W> {
    manager: AttendanceManager,
    console: Console<R, W>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(manager: AttendanceManager, console: Console<R, W>) -> Self {
        Self {
            manager,
            console,
            state: SessionState::LoggedOut,
        }
    }

    /// Run until the input is closed.
    pub fn run(&mut self) -> Result<(), InputError> {
        while self.state != SessionState::Finished {
            let event = match self.step() {
                Ok(event) => event,
                Err(InputError::Closed) => Event::InputClosed,
                Err(e) => return Err(e),
            };
            let state = std::mem::replace(&mut self.state, SessionState::Finished);
            self.state = state.next(event);
            debug!("session state: {:?}", self.state);
        }
        info!("input closed, leaving");
        Ok(())
    }

    fn step(&mut self) -> Result<Event, InputError> {
        match &self.state {
            SessionState::LoggedOut => self.login(),
            SessionState::StudentSession(_) => self.student_menu(),
            SessionState::TeacherSession(_) => self.teacher_menu(),
            SessionState::AwaitingLogout(user) => {
                let has_menu = !matches!(user.user_type, UserType::Unknown(_));
                self.ask_logout(has_menu)
            }
            SessionState::Finished => Ok(Event::InputClosed),
        }
    }

    fn login(&mut self) -> Result<Event, InputError> {
        let login = self.console.read_line("Введите логин:\n")?;
        let password = self.console.read_line("Введите пароль:\n")?;

        let user = match self.manager.authenticate(&login, &password) {
            Ok(user) => user.clone(),
            Err(e) => {
                info!("login {} rejected: {:?}", login, e);
                self.console.say(e)?;
                return Ok(Event::LoginRejected);
            }
        };

        info!("{} logged in", user.login);
        self.console.say(format!("Добро пожаловать, {}!", user.login))?;
        if user.user_type == UserType::Student {
            self.console.say("\nВаша информация:")?;
            self.welcome_summary(&user.login)?;
        }
        Ok(Event::LoginAccepted(user))
    }

    /// Grades and attendance of the student whose email is the login.
    fn welcome_summary(&mut self, login: &str) -> Result<(), InputError> {
        let Some(student) = self.manager.find_student_by_email(login) else {
            return Ok(());
        };
        report::write_grades(self.console.out(), student)?;
        report::write_attendance(self.console.out(), student)?;
        Ok(())
    }

    fn student_menu(&mut self) -> Result<Event, InputError> {
        loop {
            self.console.say(STUDENT_MENU)?;
            let choice: u32 = self.console.read_number(CHOICE_PROMPT)?;
            match choice {
                1 => self.show_grades(ID_PROMPT)?,
                2 => self.show_attendance(ID_PROMPT)?,
                3 => {
                    self.console.say("Выход из профиля.")?;
                    return Ok(Event::MenuExited);
                }
                _ => self.console.say("Некорректный выбор.")?,
            }
        }
    }

    fn teacher_menu(&mut self) -> Result<Event, InputError> {
        loop {
            self.console.say(TEACHER_MENU)?;
            let choice: u32 = self.console.read_number(CHOICE_PROMPT)?;
            match choice {
                1 => self.add_student()?,
                2 => self.remove_student()?,
                3 => self.edit_student()?,
                4 => report::write_students(self.console.out(), self.manager.list_students())?,
                5 => self.add_attendance()?,
                6 => self.show_attendance(ID_PROMPT)?,
                7 => self.add_grade()?,
                8 => self.show_grades(ID_PROMPT)?,
                9 => {
                    self.console.say("Выход из профиля.")?;
                    return Ok(Event::MenuExited);
                }
                _ => self.console.say("Некорректный выбор.")?,
            }
        }
    }

    fn ask_logout(&mut self, has_menu: bool) -> Result<Event, InputError> {
        if !has_menu {
            self.console.say("Неверный тип пользователя.")?;
        }
        if self.console.confirm("\nВыйти из профиля (да/нет)?\n")? {
            self.console.say("Выход из профиля.")?;
            Ok(Event::LogoutConfirmed)
        } else {
            Ok(Event::LogoutDeclined)
        }
    }

    fn add_student(&mut self) -> Result<(), InputError> {
        let name = self.console.read_line("Введите имя студента: ")?;
        let email = self.console.read_line("Введите email студента: ")?;
        let result = self.manager.add_student(Student::new(name, email));
        self.announce(result.map(|_| "Студент успешно добавлен."))
    }

    fn remove_student(&mut self) -> Result<(), InputError> {
        let id = self
            .console
            .read_number("Введите ID студента для удаления: ")?;
        let result = self.manager.remove_student(id);
        self.announce(result.map(|_| "Студент успешно удален."))
    }

    fn edit_student(&mut self) -> Result<(), InputError> {
        let id = self
            .console
            .read_number("Введите ID студента для редактирования: ")?;
        let name = self.console.read_line("Введите новое имя студента: ")?;
        let email = self.console.read_line("Введите новый email студента: ")?;
        let result = self.manager.edit_student(id, Student::new(name, email));
        self.announce(result.map(|_| "Данные студента успешно обновлены."))
    }

    fn add_attendance(&mut self) -> Result<(), InputError> {
        let id = self.console.read_number(ID_PROMPT)?;
        let date = self
            .console
            .read_date("Введите дату посещения (ДД.ММ.ГГГГ): ")?;
        let is_present = self
            .console
            .confirm("Присутствовал ли студент (да/нет)? ")?;
        let result = self
            .manager
            .add_attendance(id, AttendanceRecord::new(date, is_present));
        self.announce(result.map(|_| "Запись о посещении успешно добавлена."))
    }

    fn add_grade(&mut self) -> Result<(), InputError> {
        let id = self.console.read_number(ID_PROMPT)?;
        let subject = self.console.read_line("Введите предмет: ")?;
        let grade: i32 = self.console.read_number("Введите оценку: ")?;
        match self.manager.add_grade(id, &subject, grade) {
            Ok(()) => self
                .console
                .say(format!("Оценка {} по предмету {} добавлена.", grade, subject)),
            Err(e) => self.console.say(e),
        }
    }

    fn show_grades(&mut self, prompt: &str) -> Result<(), InputError> {
        let id = self.console.read_number(prompt)?;
        match self.manager.list_grades(id) {
            Ok(student) => report::write_grades(self.console.out(), student)?,
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }

    fn show_attendance(&mut self, prompt: &str) -> Result<(), InputError> {
        let id = self.console.read_number(prompt)?;
        match self.manager.list_attendance(id) {
            Ok(student) => report::write_attendance(self.console.out(), student)?,
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }

    fn announce(&mut self, result: Result<&str, RecordError>) -> Result<(), InputError> {
        match result {
            Ok(message) => self.console.say(message),
            Err(e) => self.console.say(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::user::{User, Users};
    use std::io::Cursor;

    fn manager() -> AttendanceManager {
        let mut users = Users::new();
        for (login, password, user_type) in [
            ("teacher", "t", UserType::Teacher),
            ("ivan@mail.ru", "s", UserType::Student),
            ("root", "r", UserType::Unknown("admin".to_string())),
        ] {
            users.insert(
                login.to_string(),
                User::new(login.to_string(), password.to_string(), user_type),
            );
        }
        AttendanceManager::new(users)
    }

    /// Run a scripted session and return everything it printed.
    fn run(manager: AttendanceManager, script: &[&str]) -> (String, AttendanceManager) {
        let mut input = script.join("\n");
        input.push('\n');
        let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut session = Session::new(manager, console);
        session.run().unwrap();
        assert_eq!(session.state, SessionState::Finished);
        let Session {
            manager, console, ..
        } = session;
        (String::from_utf8(console.into_output()).unwrap(), manager)
    }

    #[test]
    fn test_unknown_login_and_wrong_password() {
        let (out, _) = run(manager(), &["ghost", "x", "teacher", "wrong"]);
        assert!(out.contains("Пользователь не найден."));
        assert!(out.contains("Неверный пароль."));
        assert!(!out.contains("Добро пожаловать"));
    }

    #[test]
    fn test_teacher_manages_students() {
        let script = [
            "teacher", "t",
            "1", "Иван", "ivan@mail.ru",
            "1", "", "x@y.ru",
            "1", "Пётр", "bad email",
            "3", "1", "Иван Иванов", "ivan@mail.ru",
            "5", "1", "1.9.2024", "да",
            "7", "1", "Математика", "10",
            "7", "1", "Математика", "20",
            "7", "1", "География", "5",
            "7", "1", "Физика", "4",
            "4",
            "8", "1",
            "6", "1",
            "2", "5",
            "9",
        ];
        let (out, manager) = run(manager(), &script);

        assert!(out.contains("Добро пожаловать, teacher!"));
        assert_eq!(out.matches("Студент успешно добавлен.").count(), 1);
        assert!(out.contains("Имя студента не может быть пустым."));
        assert!(out.contains("Некорректный формат email. Попробуйте снова."));
        assert!(out.contains("Данные студента успешно обновлены."));
        assert!(out.contains("Запись о посещении успешно добавлена."));
        assert!(out.contains("Оценка 10 по предмету Математика добавлена."));
        assert!(out.contains("Неверный предмет. Доступные предметы:\nРусский язык\n"));
        assert!(out.contains("ID: 1, Имя: Иван Иванов, Email: ivan@mail.ru"));
        assert!(out.contains("Математика: 10, 20"));
        assert!(out.contains("Средняя оценка: 17.50"));
        assert!(out.contains("Дата: 01.09.2024, Присутствие: да"));
        assert!(out.contains("Студент с таким идентификатором не найден."));
        assert!(out.contains("Выход из профиля."));

        let student = manager.find(1).unwrap();
        assert_eq!(student.name, "Иван Иванов");
        assert_eq!(student.attendance.len(), 1);
        assert_eq!(student.grades.get("Физика"), None);
    }

    #[test]
    fn test_student_sees_summary_on_login() {
        let mut manager = manager();
        manager
            .add_student(Student::new("Иван".to_string(), "ivan@mail.ru".to_string()))
            .unwrap();
        manager.add_grade(1, "География", 4).unwrap();

        let (out, _) = run(manager, &["ivan@mail.ru", "s", "1", "1", "2", "7", "3"]);
        assert!(out.contains("Ваша информация:"));
        assert_eq!(out.matches("Оценки студента Иван:").count(), 2);
        assert!(out.contains("Записей о посещении нет."));
        assert!(out.contains("Студент с таким идентификатором не найден."));
        assert!(out.contains("Меню для ученика:"));
    }

    #[test]
    fn test_student_without_record_skips_summary() {
        let (out, _) = run(manager(), &["ivan@mail.ru", "s", "3"]);
        assert!(out.contains("Ваша информация:"));
        assert!(!out.contains("Оценки студента"));
        assert!(out.contains("Меню для ученика:"));
    }

    #[test]
    fn test_invalid_choice_and_bad_number() {
        let (out, _) = run(manager(), &["teacher", "t", "42", "abc", "9"]);
        assert!(out.contains("Некорректный выбор."));
        assert!(out.contains("Некорректный ввод, попробуйте снова."));
        assert!(out.contains("Выход из профиля."));
    }

    #[test]
    fn test_unknown_role_asks_to_log_out() {
        let (out, _) = run(manager(), &["root", "r", "нет", "да", "teacher", "t", "9"]);
        assert_eq!(out.matches("Неверный тип пользователя.").count(), 2);
        assert!(out.contains("Выйти из профиля (да/нет)?"));
        assert!(out.contains("Добро пожаловать, teacher!"));
    }

    #[test]
    fn test_logout_then_login_again() {
        let (out, _) = run(
            manager(),
            &["teacher", "t", "9", "да", "ivan@mail.ru", "s", "3"],
        );
        assert!(out.contains("Меню для преподавателя:"));
        assert!(out.contains("Добро пожаловать, ivan@mail.ru!"));
        assert!(out.contains("Меню для ученика:"));
    }

    #[test]
    fn test_menu_exit_asks_to_log_out() {
        let (out, _) = run(manager(), &["teacher", "t", "9", "да", "teacher", "t", "9"]);
        assert_eq!(out.matches("Добро пожаловать, teacher!").count(), 2);
        assert_eq!(out.matches("Выйти из профиля (да/нет)?").count(), 2);
        assert!(!out.contains("Пользователь не найден."));
        assert!(!out.contains("Неверный тип пользователя."));
    }

    #[test]
    fn test_declined_logout_returns_to_menu() {
        let (out, _) = run(manager(), &["ivan@mail.ru", "s", "3", "нет", "3"]);
        assert_eq!(out.matches("Меню для ученика:").count(), 2);
        assert_eq!(out.matches("Добро пожаловать").count(), 1);
    }

    #[test]
    fn test_negative_id_is_not_found() {
        let (out, _) = run(manager(), &["teacher", "t", "8", "-1", "2", "-5", "9"]);
        assert_eq!(
            out.matches("Студент с таким идентификатором не найден.").count(),
            2
        );
        assert!(!out.contains("Некорректный ввод"));
    }
}
