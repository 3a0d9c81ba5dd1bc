use encoding_rs::*;
use std::fs::File;
use std::io::BufReader;

mod test_cases;

pub use self::test_cases::{get_test_cases, TestCase};

pub static ASCII_COMPATIBLE_ENCODINGS: [&Encoding; 36] = [
    BIG5,
    EUC_JP,
    EUC_KR,
    GB18030,
    GBK,
    IBM866,
    ISO_8859_2,
    ISO_8859_3,
    ISO_8859_4,
    ISO_8859_5,
    ISO_8859_6,
    ISO_8859_7,
    ISO_8859_8,
    ISO_8859_8_I,
    ISO_8859_10,
    ISO_8859_13,
    ISO_8859_14,
    ISO_8859_15,
    ISO_8859_16,
    KOI8_R,
    KOI8_U,
    MACINTOSH,
    SHIFT_JIS,
    UTF_8,
    WINDOWS_874,
    WINDOWS_1250,
    WINDOWS_1251,
    WINDOWS_1252,
    WINDOWS_1253,
    WINDOWS_1254,
    WINDOWS_1255,
    WINDOWS_1256,
    WINDOWS_1257,
    WINDOWS_1258,
    X_MAC_CYRILLIC,
    X_USER_DEFINED,
];

fn data_dir_path(path: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), path)
}

fn for_each_test_file(path: &str, handler: &mut dyn FnMut(BufReader<File>)) {
    glob::glob(&data_dir_path(path)).unwrap().for_each(|path| {
        handler(BufReader::new(File::open(path.unwrap()).unwrap()));
    });
}

fn get_test_file_reader(path: &str) -> BufReader<File> {
    BufReader::new(File::open(data_dir_path(path)).unwrap())
}
