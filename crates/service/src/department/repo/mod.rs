pub mod seaorm;

pub use seaorm::SeaOrmDepartmentRepository;
