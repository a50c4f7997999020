pub mod u101_insert_csv;
pub mod u102_generate_load_data;
pub mod u103_download_table;
pub mod u104_copy_table;
