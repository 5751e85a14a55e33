//! Access and declaration modifiers for class members and methods.

use std::fmt;

bitflags::bitflags! {
    /// Modifier set carried by fields, constructors and methods.
    ///
    /// Visibility bits are mutually exclusive by convention; a member with no
    /// visibility bit is package-visible.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        /// Member generated by the compiler rather than written by the user.
        const SYNTHETIC = 0x1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty()
    }
}

impl Modifiers {
    /// Whether the member is public.
    #[inline]
    pub fn is_public(self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    /// Whether the member is static.
    #[inline]
    pub fn is_static(self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    /// Whether the member is final (immutable after construction for fields).
    #[inline]
    pub fn is_final(self) -> bool {
        self.contains(Modifiers::FINAL)
    }

    /// Whether the member was generated by the compiler.
    #[inline]
    pub fn is_synthetic(self) -> bool {
        self.contains(Modifiers::SYNTHETIC)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::new();
        if self.contains(Modifiers::PUBLIC) {
            words.push("public");
        }
        if self.contains(Modifiers::PROTECTED) {
            words.push("protected");
        }
        if self.contains(Modifiers::PRIVATE) {
            words.push("private");
        }
        if self.contains(Modifiers::STATIC) {
            words.push("static");
        }
        if self.contains(Modifiers::FINAL) {
            words.push("final");
        }
        write!(f, "{}", words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_queries() {
        let m = Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::SYNTHETIC;
        assert!(m.is_public());
        assert!(m.is_final());
        assert!(m.is_synthetic());
        assert!(!m.is_static());
    }

    #[test]
    fn default_is_empty() {
        assert!(Modifiers::default().is_empty());
    }

    #[test]
    fn display_skips_synthetic() {
        let m = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::SYNTHETIC;
        assert_eq!(m.to_string(), "public static");
        assert_eq!(Modifiers::empty().to_string(), "");
    }
}
