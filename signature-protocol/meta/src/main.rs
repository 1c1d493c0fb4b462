fn main() {
    multiversx_sc_meta_lib::cli_main::<signature_protocol::AbiProvider>();
}
