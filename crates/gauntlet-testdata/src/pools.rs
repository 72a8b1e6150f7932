//! Fixed adversarial string catalogs.
//!
//! These pools are the raw material for generated accounts. They are chosen
//! for edge-case coverage rather than realism: oversized strings, empty
//! strings, path traversal, markup injection, malformed email shapes, and
//! non-ASCII content. Static configuration, never loaded at runtime.

/// Username seeds. Generated usernames prefix a random integer to one of
/// these, so output varies even though the catalog is fixed-size.
pub const USERNAMES: &[&str] = &[
    "AliceAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "Bob_the_destroyer",
    "CharlieLOSTTHEfactory",
    "../../../../etc/passwd",
    "Eve<script>alert('pwned')</script>",
    "Mallory",
    "Trudy_with_a_very_very_very_long",
    "Oscar",
    "FinalBufferOverflow",
    "NullUserInjected",
    "Underoverriveroverflow",
    "StackSmasher9000",
    "INT_MIN_User",
    "Buffer_The_Magic_Dragon",
    "root:toor",
];

/// Email pool. Includes a double-@ address, a dotless local part, and a
/// domain long enough to overflow careless fixed-size buffers.
pub const EMAILS: &[&str] = &[
    "alice@nus.edu.sg",
    "bob@over.flow",
    "charlie@longdomainnamethatshouldnotexistbecauseitbreaks.memory.safety.edu.sg",
    "root@localhost",
    "eve@xss.attack",
    "mallory@evil.corp",
    "trudy@overflowy.com",
    "oscar@@doubleatsign.com",
    "segfault@0xdeadbeef",
    "null@pointer.exception",
    "emoji@.com",
    "stack@smash.me",
    "minint@underflow.net",
    "buffer@dragon.fire",
    "admin@rootkit.org",
];

/// Password pool. Contains the empty string and several entries sized to
/// defeat fixed-size stack buffers.
pub const PASSWORDS: &[&str] = &[
    "aliceinthewonderland",
    "hunter2",
    "passwordpasswordpasswordpasswordpasswordpasswordpassword",
    "toomanybytes_to_fit_in_static_array_buffer_but_we_try_anyway!!!",
    "killedthedbnowiamhappy",
    "stacksmashstacksmashstacksmashstacksmash",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "letmein123456789012345678901234567890",
    "correcthorsebatterystapleBUToverflowed",
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "minint_overflow",
    "eavesdroppingagain",
    "password_is_too_damn_long_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];
