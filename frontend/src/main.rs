//! Frontend application entry point.

use afrolearn::app::App;

fn main() {
    dioxus::launch(App);
}
