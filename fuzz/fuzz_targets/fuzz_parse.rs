#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = dyncsv::Table::from_reader(data) {
        assert!(table.row_count() >= table.len());
        let width = table.headers().len();
        for row in &table {
            assert_eq!(row.len(), width);
            let _ = row.debug_string();
            let _ = row.to_map();
        }
    }
});
