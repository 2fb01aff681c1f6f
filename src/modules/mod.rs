pub mod auth;
pub mod chatbot;
pub mod courses;
pub mod exams;
pub mod seating;
pub mod timetable;
