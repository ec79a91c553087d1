#[cfg(test)]
pub const EXPORT_DATA: &str = r##"<?xml version='1.0' encoding='UTF-8'?>
<?xml-stylesheet href="http://www.blogger.com/styles/atom.css" type="text/css"?>
<feed xmlns='http://www.w3.org/2005/Atom' xmlns:openSearch='http://a9.com/-/spec/opensearchrss/1.0/' xmlns:gd='http://schemas.google.com/g/2005' xmlns:thr='http://purl.org/syndication/thread/1.0' xmlns:app='http://purl.org/atom/app#'>
<id>tag:blogger.com,1999:blog-1.archive</id>
<updated>2024-02-27T06:20:53.000+00:00</updated>
<title type='text'>Vicen blog</title>
<generator version='7.00' uri='https://www.blogger.com'>Blogger</generator>
<entry>
<id>tag:blogger.com,1999:blog-1.settings.BLOG_NAME</id>
<published>2020-01-01T00:00:00.000+00:00</published>
<updated>2020-01-01T00:00:00.000+00:00</updated>
<category scheme='http://schemas.google.com/g/2005#kind' term='http://schemas.google.com/blogger/2008/kind#settings'/>
<title type='text'></title>
<content type='text'>Vicen blog</content>
<author><name>Vicen</name></author>
</entry>
<entry>
<id>tag:blogger.com,1999:blog-1.post-100</id>
<published>2020-01-02T03:04:05.000+00:00</published>
<updated>2020-01-03T03:04:05.000+00:00</updated>
<category scheme='http://schemas.google.com/g/2005#kind' term='http://schemas.google.com/blogger/2008/kind#post'/>
<category scheme='http://www.blogger.com/atom/ns#' term='go'/>
<title type='text'>Hello World</title>
<content type='html'>&lt;b&gt;hi&lt;/b&gt;</content>
<link rel='alternate' type='text/html' href='https://vicen.blogspot.com/2020/01/hello-world.html' title='Hello World'/>
<author><name>Vicen</name><uri>https://www.blogger.com/profile/1</uri><email>noreply@blogger.com</email><gd:image rel='http://schemas.google.com/g/2005#thumbnail' width='16' height='16' src='https://img1.blogblog.com/img/b16-rounded.gif'/></author>
<thr:total>1</thr:total>
</entry>
<entry>
<id>tag:blogger.com,1999:blog-1.post-200</id>
<published>2021-05-06T07:08:09.000+02:00</published>
<updated>2021-05-06T07:08:09.000+02:00</updated>
<app:control><app:draft>yes</app:draft></app:control>
<category scheme='http://schemas.google.com/g/2005#kind' term='http://schemas.google.com/blogger/2008/kind#post'/>
<title type='text'>Work in progress</title>
<content type='html'>&lt;p&gt;Not done yet&lt;/p&gt;</content>
<author><name>Vicen</name><uri>https://www.blogger.com/profile/1</uri></author>
</entry>
<entry>
<id>tag:blogger.com,1999:blog-1.post-100.comment-1</id>
<published>2020-01-04T00:00:00.000+00:00</published>
<updated>2020-01-04T00:00:00.000+00:00</updated>
<category scheme='http://schemas.google.com/g/2005#kind' term='http://schemas.google.com/blogger/2008/kind#comment'/>
<title type='text'>Nice post</title>
<content type='html'>Nice post</content>
<author><name>Reader</name><uri>https://example.com</uri></author>
</entry>
</feed>
"##;

/// A post entry. An empty `draft` leaves the control element out.
#[cfg(test)]
pub fn entry_xml(id: &str, title: &str, draft: &str, content: &str, labels: &[&str]) -> String {
    let control = if draft.is_empty() {
        String::new()
    } else {
        format!("<app:control><app:draft>{}</app:draft></app:control>\n", draft)
    };
    let labels: String = labels
        .iter()
        .map(|l| format!("<category scheme='http://www.blogger.com/atom/ns#' term='{}'/>\n", l))
        .collect();

    format!(
        "<entry>
<id>{}</id>
<published>2020-01-02T03:04:05.000+00:00</published>
<updated>2020-01-02T03:04:05.000+00:00</updated>
{}<category scheme='http://schemas.google.com/g/2005#kind' term='http://schemas.google.com/blogger/2008/kind#post'/>
{}<title type='text'>{}</title>
<content type='html'>{}</content>
<author><name>Vicen</name><uri>https://www.blogger.com/profile/1</uri></author>
</entry>
",
        id,
        control,
        labels,
        quick_xml::escape::escape(title),
        quick_xml::escape::escape(content)
    )
}

#[cfg(test)]
pub fn feed_xml(entries: &[String]) -> String {
    format!(
        "<?xml version='1.0' encoding='UTF-8'?>
<feed xmlns='http://www.w3.org/2005/Atom' xmlns:app='http://purl.org/atom/app#'>
{}</feed>
",
        entries.concat()
    )
}
