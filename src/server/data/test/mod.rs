mod class;
mod student;
