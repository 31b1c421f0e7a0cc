pub mod dates;
pub mod collection;
pub mod auth;
pub mod book;
pub mod loan;
pub mod reservation;

pub use auth::{CheckAuthResponse, DemoAccount, LoginRequest, LoginResponse, Session, User};
pub use book::Book;
pub use collection::Collection;
pub use loan::{Loan, LoanStatus, NewLoan};
pub use reservation::{NewReservation, Reservation, ReservationStatus};
