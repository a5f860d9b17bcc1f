// Services layer - Business logic and orchestration
pub mod login_recorder;

pub use login_recorder::LoginRecorder;
