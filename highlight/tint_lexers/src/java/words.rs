//! Built-in Java word lists.

pub(super) const KEYWORDS: &str = "
    abstract assert break case catch class const continue default do else enum
    extends final finally for goto if implements import instanceof interface
    native new package permits private protected public record return sealed
    static strictfp super switch synchronized this throw throws transient try
    var volatile when while yield true false null
";

pub(super) const TYPES: &str = "boolean byte char double float int long short void";

/// `module-info.java` directives.
pub(super) const DIRECTIVES: &str = "exports module open opens provides requires to transitive uses with";

pub(super) const CLASSES: &str = "
    ArrayList Arrays Boolean Byte Character Class Collections Double Enum Error
    Exception Float HashMap HashSet Integer Long Math Number Object Objects
    Optional Record RuntimeException Short String StringBuilder System Thread
    Throwable Void
";

pub(super) const INTERFACES: &str = "
    AutoCloseable Callable CharSequence Cloneable Collection Comparable
    Comparator Consumer Function Iterable Iterator List Map Predicate Runnable
    Set Stream Supplier
";

pub(super) const ENUMS: &str = "ChronoUnit DayOfWeek ElementType Month RetentionPolicy StandardCopyOption TimeUnit";

pub(super) const CONSTANTS: &str = "
    BYTES E MAX_VALUE MIN_VALUE NEGATIVE_INFINITY NaN PI POSITIVE_INFINITY SIZE TYPE
";
