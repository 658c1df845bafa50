//! Data models module
//!
//! This module contains all data structures used throughout the library

pub mod user;
pub mod course;
pub mod schedule;
pub mod event;
pub mod attendance;
pub mod forum;

// Re-export commonly used models
pub use user::{User, Role, RoleKind, StudentProfile, StoredUser, CreateUserRequest, UpdateUserRequest, UserFilter};
pub use course::Course;
pub use schedule::{Schedule, SchoolDay, CreateScheduleRequest, UpdateScheduleRequest, ScheduleFilter};
pub use event::{Event, EventType, CreateEventRequest, UpdateEventRequest, EventFilter};
pub use attendance::{AttendanceRecord, AttendanceMark, CreateAttendanceRequest, AttendanceFilter, GroupedAttendance};
pub use forum::{ForumPost, Comment, Votes, VoteAction, CreatePostRequest, UpdatePostRequest, CreateCommentRequest, UpdateCommentRequest, PostWithAuthor, CommentWithAuthor};
