/// Binary entrypoint for the `blockgen` executable.
///
/// Keeps the binary thin; all business logic lives in the `blockgen_lib`
/// crate so unit tests can import library functions directly.
fn main() {
    blockgen_lib::run();
}
