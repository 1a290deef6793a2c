// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_post(sections: usize) -> String {
    let base = "## Giới thiệu\n\nĐây là đoạn văn đầu tiên.\nĐây là dòng thứ hai của đoạn văn.\n\n- **Điểm** một\n- Điểm hai\n- Điểm ba\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_plain_post(sections: usize) -> String {
    let base = "💕 Những thay đổi chính\n\nphí đăng ký công ty online sắp tăng lên £100.\n→ Phí đăng ký\nâ€¢ Phí duy trì\n1️⃣ Phí giải thể\n\n";
    base.repeat(sections)
}
