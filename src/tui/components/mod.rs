//! # TUI Components
//!
//! All UI pieces of the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: root directory, document count and status
//! - `HelpBar`: key binding summary
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: single-line term input, emits `Submit`
//! - `ResultList`: matched paths, persistent `ResultListState`
//! - `Reader`: selected document, persistent `ReaderState` (scroll)
//!
//! Components receive external data as props (struct fields or constructor
//! arguments), never by reaching into global state.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top status line)
//! ├── search_box.rs   (term input)
//! ├── result_list.rs  (matched paths)
//! ├── reader.rs       (document content)
//! └── help_bar.rs     (key bindings)
//! ```

pub mod help_bar;
pub mod reader;
pub mod result_list;
pub mod search_box;
pub mod title_bar;

pub use help_bar::HelpBar;
pub use reader::{Reader, ReaderState};
pub use result_list::{ResultList, ResultListState};
pub use search_box::{SearchBox, SearchBoxEvent};
pub use title_bar::TitleBar;
