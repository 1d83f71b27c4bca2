pub const BANNER: &str = "Recruiter Assistant. Type /help for commands.";

pub const HELP: &str = "\
Commands:
  /url <url>                     set the profile URL
  /selector [css]                set the CSS selector (empty = whole page)
  /analyze [url [selector]]      extract web content from the URL
  /extracted                     edit the extracted web content
  /transcript                    enter the call transcript
  /job                           enter the job description
                                 (multi-line; finish with a line containing only '.')
  /load transcript|job <path>    read a source from a file
  /summary                       generate a talent summary
  /template                      generate a talent submission template
  /copy summary|template         copy a generated document to the clipboard
  /show [summary|template|extracted]
                                 print documents or the full extracted content
  /status                        print the whole session
  /help                          show this help
  /quit                          exit
Any other line is sent to the chat.";

pub const ENTRY_HINT: &str = "(finish with a line containing only '.')";

pub const RULE: &str = "----------------------------------------";
