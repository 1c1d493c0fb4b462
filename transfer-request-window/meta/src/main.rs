fn main() {
    multiversx_sc_meta_lib::cli_main::<transfer_request_window::AbiProvider>();
}
