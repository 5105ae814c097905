// Copyright (c) 2023 Yan Ka, Chiu.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
// 1. Redistributions of source code must retain the above copyright
//    notice, this list of conditions, and the following disclaimer,
//    without modification, immediately at the beginning of the file.
// 2. The name of the author may not be used to endorse or promote products
//    derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE AUTHOR AND CONTRIBUTORS ``AS IS'' AND
// ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR OR CONTRIBUTORS BE LIABLE FOR
// ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS
// OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION)
// HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
// LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
// OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
// SUCH DAMAGE.

pub const DOCKERFILE: &str = "\
FROM docker.elastic.co/package-registry/package-registry:main
COPY ./integrations/ /packages/package-registry/
WORKDIR /package-registry
";

pub const INSTRUCTIONS: &str = include_str!("../support/instructions.md");

/// Replace every occurrence of the `{version}` placeholder with the
/// literal version string. Plain substitution, nothing else.
pub fn render(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_placeholder() {
        let rendered = render("v{version} and again v{version}", "8.13.1");
        assert_eq!(rendered, "v8.13.1 and again v8.13.1");
    }

    #[test]
    fn test_render_is_idempotent() {
        let once = render(INSTRUCTIONS, "8.13.1");
        let twice = render(&once, "8.13.1");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rendered_instructions_mention_the_version() {
        let rendered = render(INSTRUCTIONS, "8.13.1");
        assert!(rendered.contains("v8.13.1"));
        assert!(!rendered.contains("{version}"));
    }

    #[test]
    fn test_dockerfile_copies_the_integrations_directory() {
        let rendered = render(DOCKERFILE, "8.13.1");
        assert!(rendered.contains("FROM docker.elastic.co/package-registry/package-registry:main"));
        assert!(rendered.contains("COPY ./integrations/ /packages/package-registry/"));
    }
}
