fn main() {
    multiversx_sc_meta_lib::cli_main::<access_registry::AbiProvider>();
}
