use leptos::prelude::*;
use playground::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
