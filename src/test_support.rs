//! HTML fixtures shaped like sunnah.com book pages.

/// A full book page with an optional title and the given hadith containers.
pub fn book_page(title: Option<&str>, containers: &[String]) -> String {
    let title = title
        .map(|t| format!(r#"<div class="book_page_english_name">{t}</div>"#))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Sunnah.com</title></head>
  <body>
    <div class="book_info">{title}</div>
    <div class="AllHadith">
      {}
    </div>
  </body>
</html>"#,
        containers.join("\n")
    )
}

/// A complete hadith container for `bukhari:{number}`, `Hadith {in_book}` of its book.
pub fn container(number: u32, in_book: u32) -> String {
    format!(
        r#"<div class="actualHadithContainer hadith_container_bukhari">
  <div class="englishcontainer">
    <div class="text_details">
      <p>Narrated 'Umar: hadith {number}, with a comma</p>
    </div>
  </div>
  <div class="arabic_hadith_full arabic">
    <span class="arabic_sanad">حَدَّثَنَا</span> الْحُمَيْدِيُّ</div>
  <div class="bottomItems">
    <table class="hadith_reference">
      <tr>
        <td><b>Reference</b></td>
        <td>&nbsp;:&nbsp;<a href="/bukhari:{number}">Sahih al-Bukhari {number}</a></td>
      </tr>
      <tr><td>In-book reference</td><td>&nbsp;:&nbsp;Book 1, Hadith {in_book}</td></tr>
    </table>
  </div>
</div>"#
    )
}

/// A hadith container with both text blocks but no reference table.
pub fn container_without_reference(number: u32) -> String {
    format!(
        r#"<div class="actualHadithContainer">
  <div class="text_details">Narrated Abu Huraira: hadith {number}</div>
  <div class="arabic_hadith_full">حَدَّثَنَا</div>
</div>"#
    )
}
