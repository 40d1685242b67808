//! Built-in mock dataset.

#![allow(clippy::too_many_arguments)]

use chrono::NaiveDate;

use super::model::{
    Assignment, AssignmentStatus, Course, CourseModule, EventKind, Grade, Lesson, LessonKind,
    ScheduleEvent, Student, Weekday,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(crate) fn student() -> Student {
    Student {
        id: "1".to_string(),
        name: "Александр Иванов".to_string(),
        email: "a.ivanov@university.ru".to_string(),
        avatar: None,
        student_id: "STU-2021-0457".to_string(),
        program: "Информатика и вычислительная техника".to_string(),
        year: 3,
        gpa: 4.6,
    }
}

fn course(
    id: &str,
    name: &str,
    code: &str,
    instructor: &str,
    description: &str,
    progress: u8,
    color: &str,
    schedule: &str,
) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        instructor: instructor.to_string(),
        description: description.to_string(),
        progress,
        color: color.to_string(),
        schedule: schedule.to_string(),
    }
}

pub(crate) fn courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Веб-разработка",
            "CS301",
            "Проф. Смирнова Е.А.",
            "Современные подходы к созданию веб-приложений: HTML, CSS, серверный рендеринг и клиентская интерактивность.",
            75,
            "#007aff",
            "Пн, Ср 10:00-11:30",
        ),
        course(
            "2",
            "Базы данных",
            "CS205",
            "Доц. Петров И.В.",
            "Реляционная модель, SQL, нормализация, транзакции и индексы.",
            60,
            "#30d158",
            "Вт, Чт 12:00-13:30",
        ),
        course(
            "3",
            "Алгоритмы и структуры данных",
            "CS201",
            "Проф. Кузнецов А.Н.",
            "Анализ сложности, сортировки, деревья, графы и динамическое программирование.",
            100,
            "#bf5af2",
            "Пн, Пт 14:00-15:30",
        ),
        course(
            "4",
            "Машинное обучение",
            "CS410",
            "Доц. Соколова М.Д.",
            "Линейные модели, деревья решений, нейронные сети и оценка качества моделей.",
            40,
            "#ff9f0a",
            "Ср 16:00-17:30",
        ),
        course(
            "5",
            "Компьютерные сети",
            "CS320",
            "Ст. преп. Волков Д.С.",
            "Стек TCP/IP, маршрутизация, транспортные протоколы и сетевая безопасность.",
            0,
            "#ff453a",
            "Чт 09:00-10:30",
        ),
    ]
}

fn assignment(
    id: &str,
    course_id: &str,
    course_name: &str,
    title: &str,
    description: &str,
    due_date: NaiveDate,
    status: AssignmentStatus,
    grade: Option<u32>,
) -> Assignment {
    Assignment {
        id: id.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        due_date,
        status,
        grade,
    }
}

pub(crate) fn assignments() -> Vec<Assignment> {
    vec![
        assignment(
            "1",
            "1",
            "Веб-разработка",
            "Адаптивная вёрстка",
            "Сверстать лендинг, корректно отображающийся на мобильных и настольных экранах.",
            date(2025, 3, 15),
            AssignmentStatus::Pending,
            None,
        ),
        assignment(
            "2",
            "2",
            "Базы данных",
            "Проектирование схемы",
            "Спроектировать схему базы данных библиотеки в третьей нормальной форме.",
            date(2025, 3, 18),
            AssignmentStatus::Pending,
            None,
        ),
        assignment(
            "3",
            "3",
            "Алгоритмы и структуры данных",
            "Сортировки",
            "Реализовать и сравнить сортировку слиянием и быструю сортировку.",
            date(2025, 2, 20),
            AssignmentStatus::Graded,
            Some(87),
        ),
        assignment(
            "4",
            "4",
            "Машинное обучение",
            "Линейная регрессия",
            "Обучить модель линейной регрессии и проанализировать остатки.",
            date(2025, 3, 22),
            AssignmentStatus::Pending,
            None,
        ),
        assignment(
            "5",
            "1",
            "Веб-разработка",
            "REST API",
            "Разработать REST API для списка задач с валидацией входных данных.",
            date(2025, 3, 1),
            AssignmentStatus::Submitted,
            None,
        ),
        assignment(
            "6",
            "2",
            "Базы данных",
            "SQL-запросы",
            "Написать запросы с объединениями, группировкой и подзапросами.",
            date(2025, 2, 25),
            AssignmentStatus::Graded,
            Some(92),
        ),
        assignment(
            "7",
            "5",
            "Компьютерные сети",
            "Анализ трафика",
            "Снять дамп трафика и разобрать рукопожатие TCP.",
            date(2025, 4, 2),
            AssignmentStatus::Pending,
            None,
        ),
    ]
}

fn grade(
    id: &str,
    course_id: &str,
    course_name: &str,
    assignment_name: &str,
    score: f64,
    max_grade: f64,
    on: NaiveDate,
) -> Grade {
    Grade {
        id: id.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        assignment_name: assignment_name.to_string(),
        grade: score,
        max_grade,
        date: on,
    }
}

pub(crate) fn grades() -> Vec<Grade> {
    vec![
        grade("1", "3", "Алгоритмы и структуры данных", "Сортировки", 87.0, 100.0, date(2025, 2, 22)),
        grade("2", "2", "Базы данных", "SQL-запросы", 92.0, 100.0, date(2025, 2, 27)),
        grade("3", "1", "Веб-разработка", "HTML и CSS", 45.0, 50.0, date(2025, 2, 10)),
        grade("4", "3", "Алгоритмы и структуры данных", "Графы", 38.0, 40.0, date(2025, 1, 28)),
        grade("5", "4", "Машинное обучение", "Подготовка данных", 68.0, 100.0, date(2025, 2, 14)),
        grade("6", "1", "Веб-разработка", "JavaScript", 78.0, 100.0, date(2025, 2, 24)),
        grade("7", "2", "Базы данных", "ER-диаграммы", 17.0, 20.0, date(2025, 2, 5)),
        grade("8", "3", "Алгоритмы и структуры данных", "Динамическое программирование", 55.0, 100.0, date(2025, 1, 15)),
    ]
}

fn event(
    id: &str,
    course_id: &str,
    course_name: &str,
    kind: EventKind,
    day: Weekday,
    start_time: &str,
    end_time: &str,
    room: &str,
) -> ScheduleEvent {
    ScheduleEvent {
        id: id.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        kind,
        day,
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        room: room.to_string(),
    }
}

pub(crate) fn schedule() -> Vec<ScheduleEvent> {
    use EventKind::{Exam, Lab, Lecture, Tutorial};
    use Weekday::{Friday, Monday, Thursday, Tuesday, Wednesday};

    vec![
        event("1", "1", "Веб-разработка", Lecture, Monday, "10:00", "11:30", "Ауд. 301"),
        event("2", "3", "Алгоритмы и структуры данных", Lecture, Monday, "14:00", "15:30", "Ауд. 215"),
        event("3", "2", "Базы данных", Lecture, Tuesday, "12:00", "13:30", "Ауд. 118"),
        event("4", "2", "Базы данных", Lab, Tuesday, "14:00", "15:30", "Комп. класс 4"),
        event("5", "1", "Веб-разработка", Lab, Wednesday, "10:00", "11:30", "Комп. класс 2"),
        event("6", "4", "Машинное обучение", Lecture, Wednesday, "16:00", "17:30", "Ауд. 402"),
        event("7", "5", "Компьютерные сети", Lecture, Thursday, "09:00", "10:30", "Ауд. 120"),
        event("8", "2", "Базы данных", Tutorial, Thursday, "12:00", "13:30", "Ауд. 118"),
        event("9", "3", "Алгоритмы и структуры данных", Tutorial, Friday, "14:00", "15:30", "Ауд. 215"),
        event("10", "4", "Машинное обучение", Exam, Friday, "10:00", "12:00", "Ауд. 501"),
    ]
}

fn lesson(id: u32, title: &str, kind: LessonKind, duration_minutes: u32) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        kind,
        duration_minutes,
    }
}

/// Course material outline shared by every course.
pub(crate) fn syllabus() -> Vec<CourseModule> {
    use LessonKind::{Document, Video};

    vec![
        CourseModule {
            id: 1,
            title: "Введение".to_string(),
            lessons: vec![
                lesson(1, "Обзор курса", Video, 15),
                lesson(2, "Установка инструментов", Video, 20),
            ],
        },
        CourseModule {
            id: 2,
            title: "Основы".to_string(),
            lessons: vec![
                lesson(3, "Основные концепции", Video, 30),
                lesson(4, "Практические примеры", Video, 25),
                lesson(5, "Материалы для чтения", Document, 10),
            ],
        },
        CourseModule {
            id: 3,
            title: "Продвинутые темы".to_string(),
            lessons: vec![
                lesson(6, "Сложные сценарии", Video, 40),
                lesson(7, "Лучшие практики", Video, 30),
            ],
        },
    ]
}
